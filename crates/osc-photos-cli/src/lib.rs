//! osc-photos-cli
//! ==============
//!
//! Command-line front end for [`osc-photos-core`].
//!
//! This crate primarily provides a binary (`osc-photos`). The library target
//! only carries this overview so docs.rs renders a page for it.
//!
//! Basic usage:
//!
//! ```text
//! osc-photos --help
//! osc-photos osc.json
//! osc-photos --legacy osc.json
//! osc-photos --stats --out-dir prepared/ osc.json.gz
//! ```
//!
//! For programmatic access to the pipeline, use the [`osc-photos-core`]
//! crate directly.
//!
//! [`osc-photos-core`]: https://docs.rs/osc-photos-core
#![cfg_attr(docsrs, feature(doc_cfg))]
