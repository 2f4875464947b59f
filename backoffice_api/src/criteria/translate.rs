//! [`CriteriaTranslator`]: one clause per constrained field, joined with `and`.

use super::{ColumnMapping, Condition, FieldValue, Literal, Quoting, SearchCriteria, Verbatim};
use crate::errors::InvalidCriteriaError;

/// Renders [`SearchCriteria`] into an OData-style filter expression.
///
/// Holds no state beyond borrowed, immutable configuration, so one
/// translator can be shared freely across threads.
pub struct CriteriaTranslator<'m, M: ?Sized, Q = Verbatim> {
    columns: &'m M,
    quoting: Q,
}

impl<'m, M: ColumnMapping + ?Sized> CriteriaTranslator<'m, M, Verbatim> {
    pub fn new(columns: &'m M) -> Self {
        Self {
            columns,
            quoting: Verbatim,
        }
    }
}

impl<'m, M: ColumnMapping + ?Sized, Q: Quoting> CriteriaTranslator<'m, M, Q> {
    /// Swaps the string quoting strategy.
    pub fn with_quoting<Q2: Quoting>(self, quoting: Q2) -> CriteriaTranslator<'m, M, Q2> {
        CriteriaTranslator {
            columns: self.columns,
            quoting,
        }
    }

    /// Returns `None` when no entry carries a constraint; the caller must then
    /// omit `q` entirely.
    pub fn translate(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Option<String>, InvalidCriteriaError> {
        let mut clauses = Vec::new();
        for (field, value) in criteria.active() {
            let column = self
                .columns
                .column(field)
                .ok_or_else(|| InvalidCriteriaError::UnknownField(field.to_string()))?;
            clauses.push(self.render_field(field, &column, value)?);
        }
        if clauses.is_empty() {
            return Ok(None);
        }
        let filter = clauses.join(" and ");
        tracing::trace!(filter = %filter, "translated search criteria");
        Ok(Some(filter))
    }

    fn render_field(
        &self,
        field: &str,
        column: &str,
        value: &FieldValue,
    ) -> Result<String, InvalidCriteriaError> {
        match value {
            FieldValue::Literal(literal) => self.equality(field, column, literal),
            FieldValue::List(values) => self.any_of(field, column, values),
            FieldValue::Operators(conditions) => match conditions.as_slice() {
                [] => Err(InvalidCriteriaError::EmptyConstraint(field.to_string())),
                [single] => self.condition(field, column, single),
                many => {
                    let parts = many
                        .iter()
                        .map(|c| self.condition(field, column, c))
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(format!("({})", parts.join(" and ")))
                }
            },
        }
    }

    fn condition(
        &self,
        field: &str,
        column: &str,
        condition: &Condition,
    ) -> Result<String, InvalidCriteriaError> {
        match condition {
            Condition::Compare(op, literal) => Ok(format!(
                "{} {} {}",
                column,
                op,
                self.operand(field, literal)?
            )),
            Condition::In(values) => self.any_of(field, column, values),
        }
    }

    fn any_of(
        &self,
        field: &str,
        column: &str,
        values: &[Literal],
    ) -> Result<String, InvalidCriteriaError> {
        match values {
            [] => Err(InvalidCriteriaError::EmptyConstraint(field.to_string())),
            [single] => self.equality(field, column, single),
            many => {
                let parts = many
                    .iter()
                    .map(|v| self.equality(field, column, v))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("({})", parts.join(" or ")))
            }
        }
    }

    fn equality(
        &self,
        field: &str,
        column: &str,
        literal: &Literal,
    ) -> Result<String, InvalidCriteriaError> {
        Ok(format!("{} eq {}", column, self.operand(field, literal)?))
    }

    /// NaN and infinities have no filter-language spelling.
    fn operand(&self, field: &str, literal: &Literal) -> Result<String, InvalidCriteriaError> {
        match literal {
            Literal::Float(x) if !x.is_finite() => Err(InvalidCriteriaError::NotALiteral {
                field: field.to_string(),
                found: "a non-finite number",
            }),
            other => Ok(self.quoting.render(other)),
        }
    }
}

/// Translates `criteria` against `columns` with verbatim string quoting.
pub fn translate<M: ColumnMapping + ?Sized>(
    criteria: &SearchCriteria,
    columns: &M,
) -> Result<Option<String>, InvalidCriteriaError> {
    CriteriaTranslator::new(columns).translate(criteria)
}
