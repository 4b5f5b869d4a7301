// Inkpress: blog article backend with keyword extraction.
//
// This is the library root. The keyword engine is pure; everything else is
// the workflow, storage and HTTP plumbing around it.

pub mod articles;
pub mod config;
pub mod db;
pub mod keywords;
pub mod output;
pub mod status;
pub mod web;
