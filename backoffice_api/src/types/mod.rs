mod envelope;
pub use self::envelope::ApiResponse;

mod customer;
pub use self::customer::{Customer, CUSTOMER_FIELDS};

mod collateral_roll;
pub use self::collateral_roll::{CollateralRoll, COLLATERAL_ROLL_FIELDS};
