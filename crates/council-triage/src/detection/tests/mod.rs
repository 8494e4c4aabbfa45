mod catalog;
mod common;
mod importer;
