mod accounting;

pub(crate) mod utils;

const PROG_NAME: &str = "sonic-cli-aaa";
