//! Command implementations. Each returns `Err` to make the process exit with 1.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, info, warn};
use tutordb::{Catalog, Payload, RecordIssue, Table};
use tutordb::render::{self, RenderOptions};
use tutordb_sql::{AlterAction, AlterOperation, AlterTable};

use crate::config::{Config, Loaded};
use crate::error::CliError;

/// Collect and verify the catalog, then check the config's legacy tables against it.
fn catalog(loaded: &Loaded) -> Result<Catalog, CliError> {
    tutordb_mirror::ensure_linked();
    let catalog = Catalog::collect()?;
    validate_config(&catalog, &loaded.config)?;
    Ok(catalog)
}

/// Every schema and table the config names must exist in the catalog.
fn validate_config(catalog: &Catalog, config: &Config) -> Result<(), CliError> {
    let default_schema = config.default_schema();
    catalog.schema(default_schema)?;

    for entry in &config.legacy_tables {
        match entry.split_once('.') {
            Some((schema, name)) => catalog.table_in(schema, name)?,
            None => catalog.table_in(default_schema, entry)?,
        };
    }
    Ok(())
}

fn render_options(loaded: &Loaded) -> RenderOptions {
    RenderOptions {
        legacy_tables: loaded.config.legacy_tables.clone(),
        default_schema: Some(loaded.config.default_schema().to_string()),
    }
}

fn to_json<T: facet::Facet<'static>>(value: &T) -> Result<String, CliError> {
    facet_json::to_string(value).map_err(|e| CliError::Json(e.to_string()))
}

pub fn schema(loaded: &Loaded, schema: Option<String>) -> Result<(), CliError> {
    let catalog = catalog(loaded)?;
    let options = render_options(loaded);

    let out = match schema {
        Some(name) => render::render_schema(catalog.schema(&name)?, &options),
        None => render::render_catalog_with(&catalog, &options),
    };
    print!("{out}");
    Ok(())
}

pub fn check(loaded: &Loaded) -> Result<(), CliError> {
    let catalog = catalog(loaded)?;

    for schema in catalog.schemas.keys() {
        for name in loaded.config.legacy_tables_in(schema) {
            info!(schema = %schema, table = %name, "legacy table, kept for reference");
        }
    }

    let tables = catalog.tables().count();
    let functions: usize = catalog.schemas.values().map(|g| g.functions.len()).sum();
    info!(
        schemas = catalog.schemas.len(),
        tables, functions, "catalog is consistent"
    );
    Ok(())
}

pub fn snapshot(loaded: &Loaded, output: Option<String>, check: bool) -> Result<(), CliError> {
    let catalog = catalog(loaded)?;
    let rendered = render::render_catalog_with(&catalog, &render_options(loaded));

    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| loaded.snapshot_path());

    let existing = match std::fs::read_to_string(&path) {
        Ok(existing) => Some(existing),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(source) => return Err(CliError::Read { path, source }),
    };

    if check {
        if existing.as_deref() != Some(rendered.as_str()) {
            return Err(CliError::SnapshotDrift(path));
        }
        info!(path = %path.display(), "snapshot is up to date");
        return Ok(());
    }

    if existing.as_deref() == Some(rendered.as_str()) {
        debug!(path = %path.display(), "snapshot unchanged");
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CliError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, &rendered).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote snapshot");
    Ok(())
}

pub fn info(loaded: &Loaded, table: &str, schema: Option<String>) -> Result<(), CliError> {
    let catalog = catalog(loaded)?;
    let schema = schema.unwrap_or_else(|| loaded.config.default_schema().to_string());
    let table = catalog.table_in(&schema, table)?;

    println!("{}", to_json(&tutordb::table_info(table))?);
    Ok(())
}

pub fn record(
    loaded: &Loaded,
    table: &str,
    kind: &str,
    data: &str,
    schema: Option<String>,
) -> Result<(), CliError> {
    let catalog = catalog(loaded)?;
    let schema = schema.unwrap_or_else(|| loaded.config.default_schema().to_string());
    let table = catalog.table_in(&schema, table)?;

    let issues = check_json_record(table, kind, data)?;
    if issues.is_empty() {
        info!(table = %table.name, kind, "record matches");
        return Ok(());
    }
    for issue in &issues {
        warn!(%issue, "record mismatch");
    }
    Err(CliError::RecordMismatch(issues.len()))
}

/// Parse `data` as a JSON object and check its keys against the payload named by `kind`.
fn check_json_record(table: &Table, kind: &str, data: &str) -> Result<Vec<RecordIssue>, CliError> {
    let payload = match kind {
        "insert" => Payload::Insert,
        "update" => Payload::Update,
        other => return Err(CliError::UnknownPayload(other.to_string())),
    };
    let record: BTreeMap<String, facet_value::Value> =
        facet_json::from_str(data).map_err(|e| CliError::InvalidRecord(e.to_string()))?;

    Ok(tutordb::check_record(
        table,
        payload,
        record.keys().map(String::as_str),
    ))
}

pub struct AlterRequest {
    pub table: String,
    pub operation: String,
    pub column: String,
    pub column_type: Option<String>,
    pub nullable: bool,
    pub default: Option<String>,
}

pub fn alter(loaded: &Loaded, request: AlterRequest) -> Result<(), CliError> {
    let operation: AlterOperation = request.operation.parse()?;
    let statement = plan_alter(&catalog(loaded)?, loaded.config.default_schema(), request, operation)?;

    println!("{statement}");
    let payload = tutordb_mirror::execute_ddl::Args {
        ddl_command: statement.to_sql(),
    };
    println!("{}", to_json(&payload)?);
    Ok(())
}

/// Validate an alter request against the catalog and build the statement.
fn plan_alter(
    catalog: &Catalog,
    schema: &str,
    request: AlterRequest,
    operation: AlterOperation,
) -> Result<AlterTable, CliError> {
    let table = catalog.table_in(schema, &request.table)?;
    let exists = table.column(&request.column).is_some();

    match (operation, exists) {
        (AlterOperation::Add, true) => {
            return Err(CliError::ColumnExists {
                table: table.name.clone(),
                column: request.column,
            });
        }
        (AlterOperation::Drop | AlterOperation::Modify, false) => {
            return Err(CliError::ColumnMissing {
                table: table.name.clone(),
                column: request.column,
            });
        }
        _ => {}
    }

    let action = AlterAction::from_parts(
        operation,
        request.column,
        request.column_type,
        request.nullable,
        request.default,
    )?;
    Ok(AlterTable::new(table.name.clone(), action))
}
