mod common;
mod flow;
mod results;
