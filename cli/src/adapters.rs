pub mod aws;
pub mod dry_run;
