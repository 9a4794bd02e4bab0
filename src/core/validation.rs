use rust_decimal::Decimal;

use super::discount::{compute_line_discount, validate_discount};
use super::error::ValidationError;
use super::types::*;

/// Validate a document before it is persisted or rendered.
/// Returns all validation errors found (not just the first).
///
/// The layout engine renders whatever it is given without panicking, but
/// the numbers it prints are only trustworthy when this returns an empty list.
pub fn validate_document(doc: &DocumentData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if doc.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "document number must not be empty",
        ));
    }

    if doc.lines.is_empty() {
        errors.push(ValidationError::new(
            "lines",
            "document must have at least one line item",
        ));
    }

    for (i, line) in doc.lines.iter().enumerate() {
        validate_line(line, doc, i, &mut errors);
    }

    validate_dates(doc, &mut errors);

    let totals = doc.totals();

    if let Some(global) = &doc.global_discount {
        if let Err(e) = validate_discount(global.value, global.kind, totals.lines_subtotal) {
            errors.push(e.nested("global_discount"));
        }
    }

    if doc.subtotal != totals.lines_subtotal {
        errors.push(ValidationError::new(
            "subtotal",
            format!(
                "subtotal {} does not match sum of line totals {}",
                doc.subtotal, totals.lines_subtotal
            ),
        ));
    }
    if doc.tva_amount != totals.tva_amount {
        errors.push(ValidationError::new(
            "tva_amount",
            format!(
                "VAT {} does not match computed VAT {}",
                doc.tva_amount, totals.tva_amount
            ),
        ));
    }
    if doc.total != totals.total {
        errors.push(ValidationError::new(
            "total",
            format!(
                "total {} does not match computed total {}",
                doc.total, totals.total
            ),
        ));
    }

    if let Some(payment) = &doc.payment {
        if payment.currency != doc.currency {
            errors.push(ValidationError::new(
                "payment.currency",
                format!(
                    "payment currency {} differs from document currency {}",
                    payment.currency, doc.currency
                ),
            ));
        }
    }

    errors
}

fn validate_line(line: &LineItem, doc: &DocumentData, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("lines[{index}]");

    if line.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "line description must not be empty",
        ));
    }
    if line.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity must not be negative (got {})", line.quantity),
        ));
    }
    if line.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            format!("unit price must not be negative (got {})", line.unit_price),
        ));
    }
    if line.tva_rate < Decimal::ZERO || line.tva_rate > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::new(
            format!("{prefix}.tva_rate"),
            format!("VAT rate must be between 0 and 100 (got {})", line.tva_rate),
        ));
    }

    let computed = compute_line_discount(
        line.unit_price,
        line.quantity,
        line.discount.as_ref(),
        doc.currency,
    );
    if let Some(discount) = &line.discount {
        if let Err(e) = validate_discount(discount.value, discount.kind, computed.subtotal_before_discount) {
            errors.push(e.nested(&format!("{prefix}.discount")));
        }
    }
    if line.line_total != computed.subtotal_after_discount {
        errors.push(ValidationError::new(
            format!("{prefix}.line_total"),
            format!(
                "line total {} does not match quantity × price − discount = {}",
                line.line_total, computed.subtotal_after_discount
            ),
        ));
    }
}

fn validate_dates(doc: &DocumentData, errors: &mut Vec<ValidationError>) {
    if let Some(due) = doc.due_date {
        if due < doc.issue_date {
            errors.push(ValidationError::new(
                "due_date",
                "due date must not be before the issue date",
            ));
        }
    }
    if let Some(valid_until) = doc.valid_until {
        if valid_until < doc.issue_date {
            errors.push(ValidationError::new(
                "valid_until",
                "validity date must not be before the issue date",
            ));
        }
    }
}
