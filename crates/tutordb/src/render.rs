//! Deterministic text rendering of a catalog.
//!
//! The output uses the TypeScript-like notation of the generated schema
//! file (`name?: type | null`). Rendering depends only on the catalog, and
//! catalogs are sorted on assembly, so rendering the same registrations
//! twice yields identical bytes. This is what `tutordb snapshot` writes.

use tutordb_schema::{
    Argument, Column, CompositeType, EnumType, Function, PayloadField, Returns, SchemaGroup, Table,
};

use crate::Catalog;

/// Rendering knobs.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Tables to flag as legacy, as `name` (default schema) or `schema.name`.
    pub legacy_tables: Vec<String>,
    /// Schema used to resolve unqualified names in `legacy_tables`.
    pub default_schema: Option<String>,
}

impl RenderOptions {
    fn is_legacy(&self, table: &Table) -> bool {
        let default_schema = self
            .default_schema
            .as_deref()
            .unwrap_or(tutordb_schema::DEFAULT_SCHEMA);
        self.legacy_tables.iter().any(|entry| match entry.split_once('.') {
            Some((schema, name)) => schema == table.schema && name == table.name,
            None => table.schema == default_schema && *entry == table.name,
        })
    }
}

/// Render the whole catalog.
pub fn render_catalog(catalog: &Catalog) -> String {
    render_catalog_with(catalog, &RenderOptions::default())
}

pub fn render_catalog_with(catalog: &Catalog, options: &RenderOptions) -> String {
    catalog
        .schemas
        .values()
        .map(|group| render_schema(group, options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one schema grouping.
pub fn render_schema(group: &SchemaGroup, options: &RenderOptions) -> String {
    let mut out = String::new();
    line(&mut out, 0, &format!("{}: {{", group.name));

    section(&mut out, "Tables", group.tables.is_empty());
    for table in group.tables.values() {
        render_table(&mut out, table, options.is_legacy(table));
    }
    close_section(&mut out, group.tables.is_empty());

    section(&mut out, "Views", group.views.is_empty());
    for view in group.views.values() {
        line(&mut out, 2, &format!("{}: {{", view.name));
        render_columns(&mut out, 3, "Row", &view.columns);
        line(&mut out, 2, "}");
    }
    close_section(&mut out, group.views.is_empty());

    section(&mut out, "Functions", group.functions.is_empty());
    for function in group.functions.values() {
        render_function(&mut out, function);
    }
    close_section(&mut out, group.functions.is_empty());

    section(&mut out, "Enums", group.enums.is_empty());
    for enum_type in group.enums.values() {
        render_enum(&mut out, enum_type);
    }
    close_section(&mut out, group.enums.is_empty());

    section(&mut out, "CompositeTypes", group.composite_types.is_empty());
    for composite in group.composite_types.values() {
        render_composite(&mut out, composite);
    }
    close_section(&mut out, group.composite_types.is_empty());

    line(&mut out, 0, "}");
    out
}

fn line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push_str(text);
    out.push('\n');
}

fn section(out: &mut String, title: &str, empty: bool) {
    if empty {
        line(out, 1, &format!("{title}: {{}}"));
    } else {
        line(out, 1, &format!("{title}: {{"));
    }
}

fn close_section(out: &mut String, empty: bool) {
    if !empty {
        line(out, 1, "}");
    }
}

fn nullable_suffix(nullable: bool) -> &'static str {
    if nullable { " | null" } else { "" }
}

fn render_columns(out: &mut String, indent: usize, title: &str, columns: &[Column]) {
    line(out, indent, &format!("{title}: {{"));
    for column in columns {
        line(
            out,
            indent + 1,
            &format!(
                "{}: {}{}",
                column.name,
                column.pg_type.to_ts_type(),
                nullable_suffix(column.nullable)
            ),
        );
    }
    line(out, indent, "}");
}

fn render_payload(out: &mut String, title: &str, table: &Table, fields: &[PayloadField]) {
    line(out, 3, &format!("{title}: {{"));
    for field in fields {
        let (optional, nullable) = match table.column(&field.name) {
            Some(column) => (field.is_optional_for(column), column.nullable),
            None => (field.options > 0, field.options > 1),
        };
        line(
            out,
            4,
            &format!(
                "{}{}: {}{}",
                field.name,
                if optional { "?" } else { "" },
                field.pg_type.to_ts_type(),
                nullable_suffix(nullable)
            ),
        );
    }
    line(out, 3, "}");
}

fn render_table(out: &mut String, table: &Table, legacy: bool) {
    if legacy {
        line(out, 2, &format!("{}: {{ // legacy", table.name));
    } else {
        line(out, 2, &format!("{}: {{", table.name));
    }

    render_columns(out, 3, "Row", &table.columns);
    render_payload(out, "Insert", table, &table.insert);
    render_payload(out, "Update", table, &table.update);

    if table.relationships.is_empty() {
        line(out, 3, "Relationships: []");
    } else {
        line(out, 3, "Relationships: [");
        for rel in &table.relationships {
            line(
                out,
                4,
                &format!(
                    "{}: ({}) -> {}({}){}",
                    rel.name,
                    rel.columns.join(", "),
                    rel.referenced_relation,
                    rel.referenced_columns.join(", "),
                    if rel.is_one_to_one { " one-to-one" } else { "" }
                ),
            );
        }
        line(out, 3, "]");
    }

    line(out, 2, "}");
}

fn render_argument(arg: &Argument) -> String {
    format!(
        "{}{}: {}",
        arg.name,
        if arg.optional { "?" } else { "" },
        arg.pg_type.to_ts_type()
    )
}

fn render_function(out: &mut String, function: &Function) {
    line(out, 2, &format!("{}: {{", function.name));

    if function.args.is_empty() {
        line(out, 3, "Args: {}");
    } else {
        line(out, 3, "Args: {");
        for arg in &function.args {
            line(out, 4, &render_argument(arg));
        }
        line(out, 3, "}");
    }

    match &function.returns {
        Returns::Void => line(out, 3, "Returns: undefined"),
        Returns::Scalar(pg_type) => line(out, 3, &format!("Returns: {}", pg_type.to_ts_type())),
        Returns::SetOf(columns) => {
            line(out, 3, "Returns: {");
            for column in columns {
                line(
                    out,
                    4,
                    &format!(
                        "{}: {}{}",
                        column.name,
                        column.pg_type.to_ts_type(),
                        nullable_suffix(column.nullable)
                    ),
                );
            }
            line(out, 3, "}[]");
        }
    }

    line(out, 2, "}");
}

fn render_enum(out: &mut String, enum_type: &EnumType) {
    let variants: Vec<String> = enum_type
        .variants
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect();
    line(
        out,
        2,
        &format!("{}: {}", enum_type.name, variants.join(" | ")),
    );
}

fn render_composite(out: &mut String, composite: &CompositeType) {
    line(out, 2, &format!("{}: {{", composite.name));
    for column in &composite.attributes {
        line(
            out,
            3,
            &format!(
                "{}: {}{}",
                column.name,
                column.pg_type.to_ts_type(),
                nullable_suffix(column.nullable)
            ),
        );
    }
    line(out, 2, "}");
}
