//! Database project manifest entries.
//!
//! Generated objects live in a SQL Server database project laid out as
//! `{schema}/Tables/{table}.sql` and `{schema}/Views/{view}.sql`. The project
//! file lists every object with a `<Build Include="..." />` line using
//! backslash separators.

use serde::Serialize;

/// A generated file: project-relative path and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Project file and the entries to add to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub project_file: String,
    pub entries: Vec<String>,
}

/// Relative path of a table script.
pub fn table_file_path(schema: &str, table: &str) -> String {
    format!("{}/Tables/{}.sql", schema, table)
}

/// Relative path of a view script.
pub fn view_file_path(schema: &str, view: &str) -> String {
    format!("{}/Views/{}.sql", schema, view)
}

/// Path of the `.sqlproj` file of a database project.
pub fn project_file_path(database: &str) -> String {
    format!("{}/{}.sqlproj", database, database)
}

/// Project entry for one file path.
pub fn build_entry(path: &str) -> String {
    format!("    <Build Include=\"{}\" />", path.replace('/', "\\"))
}

/// Project entries for the given files, in order.
pub fn build_entries(files: &[GeneratedFile]) -> Vec<String> {
    files.iter().map(|f| build_entry(&f.path)).collect()
}

/// Manifest for the given files in the project of `database`.
pub fn build_manifest(database: &str, files: &[GeneratedFile]) -> Manifest {
    Manifest {
        project_file: project_file_path(database),
        entries: build_entries(files),
    }
}
