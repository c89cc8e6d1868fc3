pub(crate) mod sizing;
