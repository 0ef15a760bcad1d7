#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/redline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod altman;
pub mod calculator;
pub mod dupont;
pub mod lifted;
pub mod piotroski;
pub mod signals;

pub use altman::{AltmanZ, EntityClass};
pub use calculator::QuantScoreCalculator;
pub use dupont::DuPont;
pub use lifted::Metric;
pub use piotroski::{MIN_RESOLVED_SIGNALS, PiotroskiScore};
pub use signals::{FinancialRatios, RatioPair};
