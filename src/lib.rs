//! # qrfaktura
//!
//! Swiss invoice and quote rendering: CHF cash rounding, line and global
//! discounts, per-rate VAT, themed A4 layout and the QR-bill payment slip.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! The money engines (rounding, discounts, totals) are plain functions and
//! work without any rendering context.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use qrfaktura::core::*;
//! use rust_decimal_macros::dec;
//!
//! let lines = [TotalsLine { subtotal_after_discount: dec!(30.00), tva_rate: dec!(8.1) }];
//! let totals = compute_invoice_totals(&lines, Some(&Discount::percent(dec!(10))), Currency::Chf);
//! assert_eq!(totals.subtotal_after_global_discount, dec!(27.00));
//! assert_eq!(totals.tva_amount, dec!(2.20));
//! assert_eq!(totals.total, dec!(29.20));
//!
//! let invoice = DocumentBuilder::invoice("RE-2026-001", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
//!     .sender(PartyBuilder::new("Atelier Muster GmbH", AddressBuilder::new("8001", "Zürich", "CH").build()).build())
//!     .recipient(PartyBuilder::new("Kunde AG", AddressBuilder::new("3011", "Bern", "CH").build()).build())
//!     .add_line(LineItemBuilder::new("Beratung", dec!(3), "h", dec!(10)).build())
//!     .build()
//!     .unwrap();
//! assert_eq!(invoice.total, dec!(32.45));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, money engines, themes, payment slip data |
//! | `pdf` (default) | Layout engine, QR-bill renderer, PDF output |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod slip;

#[cfg(feature = "core")]
pub mod theme;

#[cfg(feature = "pdf")]
pub mod layout;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
