//! errgrain - reclassify coarse operating-system errors into fine-grained,
//! named categories.
//!
//! `std::io` signals every failure through one generic [`std::io::Error`].
//! This crate lets calling code react to precise, intention-revealing
//! categories ("file not found", "connection refused", "timed out")
//! without wrapping or altering the original error: a [`Category`] binds a
//! name to a membership rule, and [`dispatch`] tries an ordered list of
//! categories against an in-flight error. The first match wins; an
//! unmatched error propagates to the caller unchanged.
//!
//! ```
//! use errgrain::{catalog, dispatch};
//!
//! let err = std::fs::read_to_string("/no/such/settings.conf").unwrap_err();
//! let fallback = dispatch(err)
//!     .on(catalog::file_not_found(), |_| String::new())
//!     .on(catalog::permission_denied(), |_| String::from("<denied>"))
//!     .finish()
//!     .expect("ENOENT matches file-not-found");
//! assert_eq!(fallback, "");
//! ```

pub mod catalog;
pub mod category;
pub mod dispatch;
pub mod logging;

pub use category::{Category, CategoryError, CategoryInfo};
pub use dispatch::{classify, dispatch, Dispatch};
