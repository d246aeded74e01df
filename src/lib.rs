//! Public library API for reconstructing ADF value trees from an
//! externally driven decode session.

/// Stack machine, value model, diagnostics, and hash registry.
pub mod adf;
