//! The payment slip collaborator and the built-in Swiss QR-bill renderer.

use qrcode::{Color, EcLevel, QrCode};

use super::format::format_amount;
use super::labels::Labels;
use super::metrics::{FontWeight, line_height, text_width, truncate_to_width};
use super::page::DrawOp;
use crate::core::Language;
use crate::slip::{SlipError, SlipPayload, format_iban, format_reference};
use crate::theme::Rgb;

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;
/// Height of the payment slip: 105 mm.
pub const SLIP_HEIGHT: f32 = 105.0 * MM;
/// Width of the receipt part: 62 mm.
pub const RECEIPT_WIDTH: f32 = 62.0 * MM;
const QR_SIZE: f32 = 46.0 * MM;
const CROSS_SIZE: f32 = 7.0 * MM;

/// Region of the page a slip renderer may draw into (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlipArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SlipArea {
    /// The full-width slip area at the bottom of a page.
    pub fn bottom_of_page(page_width: f32, page_height: f32) -> Self {
        Self {
            x: 0.0,
            y: page_height - SLIP_HEIGHT,
            width: page_width,
            height: SLIP_HEIGHT,
        }
    }
}

/// Draws a payment slip for a mapped payload.
///
/// The engine appends the returned ops to the current page only when
/// rendering succeeds, so a failing renderer never leaves half a slip
/// behind.
pub trait SlipRenderer: Send + Sync {
    fn render(
        &self,
        payload: &SlipPayload,
        language: Language,
        area: SlipArea,
    ) -> Result<Vec<DrawOp>, SlipError>;
}

/// Receipt plus payment part with the Swiss QR code, as printed at the
/// bottom of Swiss invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwissQrBillRenderer;

impl SlipRenderer for SwissQrBillRenderer {
    fn render(
        &self,
        payload: &SlipPayload,
        language: Language,
        area: SlipArea,
    ) -> Result<Vec<DrawOp>, SlipError> {
        let code = QrCode::with_error_correction_level(payload.to_qr_text().as_bytes(), EcLevel::M)
            .map_err(|e| SlipError::Render(format!("QR code: {e}")))?;

        let labels = Labels::for_language(language);
        let mut slip = SlipWriter { ops: Vec::new() };
        slip.separators(area, labels);
        slip.receipt(payload, labels, area);
        slip.payment_part(payload, labels, area);
        slip.qr_code(&code, area.x + RECEIPT_WIDTH + 5.0 * MM, area.y + 17.0 * MM);
        Ok(slip.ops)
    }
}

/// Slip amounts use a space as thousands separator.
fn slip_amount(amount: rust_decimal::Decimal) -> String {
    format_amount(amount).replace('\'', " ")
}

struct SlipWriter {
    ops: Vec<DrawOp>,
}

impl SlipWriter {
    fn text(&mut self, x: f32, y: f32, text: &str, weight: FontWeight, size: f32) {
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            weight,
            size,
            color: Rgb::BLACK,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Option<Rgb>, stroke: Option<Rgb>) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        });
    }

    fn separators(&mut self, area: SlipArea, labels: &Labels) {
        let gray = Rgb::new(0x80, 0x80, 0x80);
        self.ops.push(DrawOp::Line {
            x1: area.x,
            y1: area.y,
            x2: area.x + area.width,
            y2: area.y,
            width: 0.5,
            color: gray,
            dashed: true,
        });
        self.ops.push(DrawOp::Line {
            x1: area.x + RECEIPT_WIDTH,
            y1: area.y,
            x2: area.x + RECEIPT_WIDTH,
            y2: area.y + area.height,
            width: 0.5,
            color: gray,
            dashed: true,
        });
        let size = 6.0;
        let x = area.x + (area.width - text_width(labels.separate, FontWeight::Regular, size)) / 2.0;
        self.text(x, area.y - 2.0, labels.separate, FontWeight::Regular, size);
    }

    /// Heading plus value lines; returns the y below the block.
    #[allow(clippy::too_many_arguments)]
    fn block(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        heading: &str,
        lines: &[String],
        heading_size: f32,
        value_size: f32,
    ) -> f32 {
        let mut y = y + heading_size;
        self.text(x, y, heading, FontWeight::Bold, heading_size);
        for line in lines {
            y += line_height(value_size) - 1.0;
            let line = truncate_to_width(line, FontWeight::Regular, value_size, width);
            self.text(x, y, &line, FontWeight::Regular, value_size);
        }
        y + line_height(value_size)
    }

    /// Corner marks of a blank field the payer fills in by hand.
    fn blank_field(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let arm = 3.0 * MM;
        let corners = [
            (x, y, 1.0, 1.0),
            (x + width, y, -1.0, 1.0),
            (x, y + height, 1.0, -1.0),
            (x + width, y + height, -1.0, -1.0),
        ];
        for (cx, cy, dx, dy) in corners {
            for (x2, y2) in [(cx + arm * dx, cy), (cx, cy + arm * dy)] {
                self.ops.push(DrawOp::Line {
                    x1: cx,
                    y1: cy,
                    x2,
                    y2,
                    width: 0.75,
                    color: Rgb::BLACK,
                    dashed: false,
                });
            }
        }
    }

    fn receipt(&mut self, payload: &SlipPayload, labels: &Labels, area: SlipArea) {
        let x = area.x + 5.0 * MM;
        let width = 52.0 * MM;
        let (heading, value) = (6.0, 8.0);

        self.text(x, area.y + 5.0 * MM + 11.0, labels.receipt, FontWeight::Bold, 11.0);
        let mut y = area.y + 12.0 * MM;

        let mut account = vec![format_iban(&payload.account)];
        account.extend(payload.creditor.lines());
        y = self.block(x, y, width, labels.account_payable_to, &account, heading, value);
        if let Some(reference) = &payload.reference {
            let formatted = format_reference(reference, payload.reference_type);
            y = self.block(x, y, width, labels.reference, &[formatted], heading, value);
        }
        match &payload.debtor {
            Some(debtor) => {
                self.block(x, y, width, labels.payable_by, &debtor.lines(), heading, value);
            }
            None => {
                self.text(x, y + heading, labels.payable_by_blank, FontWeight::Bold, heading);
                self.blank_field(x, y + heading + 2.0, 52.0 * MM, 20.0 * MM);
            }
        }

        let amount_y = area.y + 68.0 * MM;
        self.text(x, amount_y + heading, labels.currency, FontWeight::Bold, heading);
        self.text(x, amount_y + heading + 10.0, payload.currency.code(), FontWeight::Regular, value);
        let amount_x = x + 22.0 * MM;
        self.text(amount_x, amount_y + heading, labels.amount, FontWeight::Bold, heading);
        match payload.amount {
            Some(amount) => self.text(
                amount_x,
                amount_y + heading + 10.0,
                &slip_amount(amount),
                FontWeight::Regular,
                value,
            ),
            None => self.blank_field(amount_x, amount_y + heading + 3.0, 30.0 * MM, 10.0 * MM),
        }

        let acceptance = labels.acceptance_point;
        let right = area.x + RECEIPT_WIDTH - 5.0 * MM;
        let ax = right - text_width(acceptance, FontWeight::Bold, heading);
        self.text(ax, area.y + 82.0 * MM + heading, acceptance, FontWeight::Bold, heading);
    }

    fn payment_part(&mut self, payload: &SlipPayload, labels: &Labels, area: SlipArea) {
        let left = area.x + RECEIPT_WIDTH + 5.0 * MM;
        let (heading, value) = (8.0, 10.0);

        self.text(left, area.y + 5.0 * MM + 11.0, labels.payment_part, FontWeight::Bold, 11.0);

        let amount_y = area.y + 68.0 * MM;
        self.text(left, amount_y + heading, labels.currency, FontWeight::Bold, heading);
        self.text(left, amount_y + heading + 12.0, payload.currency.code(), FontWeight::Regular, value);
        let amount_x = left + 14.0 * MM;
        self.text(amount_x, amount_y + heading, labels.amount, FontWeight::Bold, heading);
        match payload.amount {
            Some(amount) => self.text(
                amount_x,
                amount_y + heading + 12.0,
                &slip_amount(amount),
                FontWeight::Regular,
                value,
            ),
            None => self.blank_field(amount_x, amount_y + heading + 3.0, 40.0 * MM, 15.0 * MM),
        }

        let x = area.x + RECEIPT_WIDTH + 56.0 * MM;
        let width = area.x + area.width - 5.0 * MM - x;
        let mut y = area.y + 5.0 * MM;

        let mut account = vec![format_iban(&payload.account)];
        account.extend(payload.creditor.lines());
        y = self.block(x, y, width, labels.account_payable_to, &account, heading, value);
        if let Some(reference) = &payload.reference {
            let formatted = format_reference(reference, payload.reference_type);
            y = self.block(x, y, width, labels.reference, &[formatted], heading, value);
        }
        if let Some(message) = &payload.message {
            y = self.block(
                x,
                y,
                width,
                labels.additional_information,
                std::slice::from_ref(message),
                heading,
                value,
            );
        }
        match &payload.debtor {
            Some(debtor) => {
                self.block(x, y, width, labels.payable_by, &debtor.lines(), heading, value);
            }
            None => {
                self.text(x, y + heading, labels.payable_by_blank, FontWeight::Bold, heading);
                self.blank_field(x, y + heading + 2.0, 65.0 * MM, 25.0 * MM);
            }
        }
    }

    /// QR modules as merged horizontal runs, plus the Swiss cross.
    fn qr_code(&mut self, code: &QrCode, x: f32, y: f32) {
        let modules = code.width();
        let colors = code.to_colors();
        let module = QR_SIZE / modules as f32;

        for row in 0..modules {
            let mut col = 0;
            while col < modules {
                if colors[row * modules + col] != Color::Dark {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < modules && colors[row * modules + col] == Color::Dark {
                    col += 1;
                }
                self.rect(
                    x + start as f32 * module,
                    y + row as f32 * module,
                    (col - start) as f32 * module,
                    module,
                    Some(Rgb::BLACK),
                    None,
                );
            }
        }

        let cx = x + (QR_SIZE - CROSS_SIZE) / 2.0;
        let cy = y + (QR_SIZE - CROSS_SIZE) / 2.0;
        self.rect(cx, cy, CROSS_SIZE, CROSS_SIZE, Some(Rgb::WHITE), None);
        let inset = 0.5 * MM;
        let inner = CROSS_SIZE - 2.0 * inset;
        self.rect(cx + inset, cy + inset, inner, inner, Some(Rgb::BLACK), None);
        let (long, short) = (inner * 0.6, inner * 0.18);
        let center_x = cx + CROSS_SIZE / 2.0;
        let center_y = cy + CROSS_SIZE / 2.0;
        self.rect(center_x - short / 2.0, center_y - long / 2.0, short, long, Some(Rgb::WHITE), None);
        self.rect(center_x - long / 2.0, center_y - short / 2.0, long, short, Some(Rgb::WHITE), None);
    }
}
