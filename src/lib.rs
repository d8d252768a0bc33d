pub mod bbs;
pub mod math;

pub use bbs::{
    BbsConfig, BbsError, BbsParams, BbsResult, BlumBlumShub, BlumBlumShubBuilder,
    ErrorKind, PrimeRole, ValidatedParams, fold_to_integer,
    generate, validate,
};
pub use math::{PrimalityTest, ProbablePrime};
