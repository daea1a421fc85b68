//! # ARM Single Data Transfer Classification
//!
//! Turns a slot of one of the register-offset `LDR`/`STR` tables into the
//! handler that serves it.
//!
//! ## Format
//!
//! ```text
//! 31-28  27-26  25  24  23  22  21  20  19-16  15-12  11-7    6-5   4   3-0
//! [Cond] [0 1]  [I] [P] [U] [B] [W] [L] [Rn]   [Rd]   [Shift] [Typ] [R] [Rm]
//! ```
//!
//! - **I = 1**: the offset is a shifted register (the only form tabulated here)
//! - **P**: pre (1) or post (0) indexing, fixed per table family
//! - **U**: add (1) or subtract (0) the offset
//! - **B**: byte (1) or word (0) quantity
//! - **W**: write back the address (pre-indexed only)
//! - **L**: load (1) or store (0)
//!
//! ## Pipeline
//!
//! ```text
//! OpcodeIndex ─► RawFields ─► classify ─► DecodeFields ─► handler_name
//!  (fields)      (legend)                     │
//!                    └── reserved slot ─► None (Unimplemented)
//! ```
//!
//! ## Submodules
//!
//! - [`fields`] - Bit field extraction
//! - [`legend`] - Variant and shift legends, classification
//! - [`handler_name`] - Handler symbol synthesis
//! - [`flags`] - Single-bit flags of the encoding

pub mod fields;
pub mod flags;
pub mod handler_name;
pub mod legend;
