mod common;
mod composer;
