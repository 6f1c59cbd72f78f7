//! Registration records and the reflection that turns them into metadata.
//!
//! Each `*Def` is a `const`-constructible bundle of `&'static Shape`s that
//! can be submitted to `inventory`. Converting a def into catalog metadata
//! walks the shapes with facet reflection; problems come back as
//! [`SchemaError`] values.

use crate::{
    Argument, Attr, Column, CompositeType, CompositeTypeShape, EnumShape, EnumType, Function,
    FunctionShape, Jsonb, PayloadField, PgType, Relationship, Returns, SchemaError, Table,
    TableShape, View, ViewShape,
};
use facet::{Facet, Field, Shape, Type, UserType};

/// A registered table.
///
/// Submitted to inventory by `#[facet(derive(tutordb::Table))]` on a row type.
pub struct TableDef {
    pub schema: &'static str,
    pub name: &'static str,
    /// The row shape.
    pub row: &'static Shape,
    /// The insert payload shape.
    pub insert: &'static Shape,
    /// The update payload shape.
    pub update: &'static Shape,
}

impl TableDef {
    pub const fn new<T: TableShape>() -> Self {
        Self {
            schema: T::SCHEMA,
            name: T::NAME,
            row: T::SHAPE,
            insert: <T::Insert as Facet<'static>>::SHAPE,
            update: <T::Update as Facet<'static>>::SHAPE,
        }
    }

    /// Convert this definition to a [`Table`].
    pub fn to_table(&self) -> Result<Table, SchemaError> {
        let relation = qualified(self.schema, self.name);

        let fields = struct_fields(self.row, &relation)?;
        let columns = fields
            .iter()
            .map(|field| reflect_column(field, &relation))
            .collect::<Result<Vec<_>, _>>()?;
        let relationships = reflect_relationships(self.name, fields, &columns, &relation)?;

        let insert = reflect_payload(self.insert, &relation)?;
        let update = reflect_payload(self.update, &relation)?;

        Ok(Table {
            schema: self.schema.to_string(),
            name: self.name.to_string(),
            columns,
            insert,
            update,
            relationships,
            doc: shape_doc(self.row),
        })
    }
}

/// A registered view.
pub struct ViewDef {
    pub schema: &'static str,
    pub name: &'static str,
    pub row: &'static Shape,
}

impl ViewDef {
    pub const fn new<T: ViewShape>() -> Self {
        Self {
            schema: T::SCHEMA,
            name: T::NAME,
            row: T::SHAPE,
        }
    }

    pub fn to_view(&self) -> Result<View, SchemaError> {
        let relation = qualified(self.schema, self.name);
        let columns = reflect_columns(self.row, &relation)?;
        Ok(View {
            schema: self.schema.to_string(),
            name: self.name.to_string(),
            columns,
            doc: shape_doc(self.row),
        })
    }
}

/// A registered RPC function.
pub struct FunctionDef {
    pub schema: &'static str,
    pub name: &'static str,
    pub args: &'static Shape,
    pub returns: &'static Shape,
}

impl FunctionDef {
    pub const fn new<F: FunctionShape>() -> Self {
        Self {
            schema: F::SCHEMA,
            name: F::NAME,
            args: F::SHAPE,
            returns: <F::Returns as Facet<'static>>::SHAPE,
        }
    }

    pub fn to_function(&self) -> Result<Function, SchemaError> {
        let relation = qualified(self.schema, self.name);

        let mut args = Vec::new();
        for field in struct_fields(self.args, &relation)? {
            let (inner, depth) = peel_options(field.shape.get());
            if depth > 1 {
                return Err(SchemaError::NestedOption {
                    relation,
                    field: field.name.to_string(),
                    depth,
                });
            }
            args.push(Argument {
                name: column_name(field).to_string(),
                pg_type: pg_type_of(inner, field, &relation)?,
                optional: depth == 1,
            });
        }

        Ok(Function {
            schema: self.schema.to_string(),
            name: self.name.to_string(),
            args,
            returns: reflect_returns(self.returns, &relation)?,
            doc: shape_doc(self.args),
        })
    }
}

/// A registered composite type.
pub struct CompositeTypeDef {
    pub schema: &'static str,
    pub name: &'static str,
    pub shape: &'static Shape,
}

impl CompositeTypeDef {
    pub const fn new<C: CompositeTypeShape>() -> Self {
        Self {
            schema: C::SCHEMA,
            name: C::NAME,
            shape: C::SHAPE,
        }
    }

    pub fn to_composite_type(&self) -> Result<CompositeType, SchemaError> {
        let relation = qualified(self.schema, self.name);
        Ok(CompositeType {
            schema: self.schema.to_string(),
            name: self.name.to_string(),
            attributes: reflect_columns(self.shape, &relation)?,
        })
    }
}

/// A registered enum.
pub struct EnumDef {
    pub schema: &'static str,
    pub name: &'static str,
    pub shape: &'static Shape,
}

impl EnumDef {
    pub const fn new<E: EnumShape>() -> Self {
        Self {
            schema: E::SCHEMA,
            name: E::NAME,
            shape: E::SHAPE,
        }
    }

    pub fn to_enum(&self) -> Result<EnumType, SchemaError> {
        let enum_type = match &self.shape.ty {
            Type::User(UserType::Enum(e)) => e,
            _ => {
                return Err(SchemaError::NotAnEnum {
                    relation: qualified(self.schema, self.name),
                    shape: self.shape.to_string(),
                });
            }
        };

        Ok(EnumType {
            schema: self.schema.to_string(),
            name: self.name.to_string(),
            variants: enum_type
                .variants
                .iter()
                .map(|v| v.name.to_string())
                .collect(),
        })
    }
}

inventory::collect!(TableDef);
inventory::collect!(ViewDef);
inventory::collect!(FunctionDef);
inventory::collect!(CompositeTypeDef);
inventory::collect!(EnumDef);

fn qualified(schema: &str, name: &str) -> String {
    format!("{schema}.{name}")
}

fn shape_doc(shape: &Shape) -> Option<String> {
    join_doc(shape.doc)
}

fn join_doc(doc: &[&str]) -> Option<String> {
    if doc.is_empty() {
        None
    } else {
        Some(
            doc.iter()
                .map(|line| line.trim())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

fn struct_fields(shape: &'static Shape, relation: &str) -> Result<&'static [Field], SchemaError> {
    match &shape.ty {
        Type::User(UserType::Struct(s)) => Ok(s.fields),
        _ => Err(SchemaError::NotAStruct {
            relation: relation.to_string(),
            shape: shape.to_string(),
        }),
    }
}

/// Strip every `Option` layer, counting them.
fn peel_options(shape: &'static Shape) -> (&'static Shape, u8) {
    let mut shape = shape;
    let mut depth = 0;
    while shape.decl_id == Option::<()>::SHAPE.decl_id {
        match shape.inner {
            Some(inner) => {
                shape = inner;
                depth += 1;
            }
            None => break,
        }
    }
    (shape, depth)
}

fn pg_type_of(shape: &Shape, field: &Field, relation: &str) -> Result<PgType, SchemaError> {
    shape_to_pg_type(shape).ok_or_else(|| SchemaError::UnsupportedType {
        relation: relation.to_string(),
        field: field.name.to_string(),
        ty: shape.to_string(),
    })
}

fn reflect_columns(shape: &'static Shape, relation: &str) -> Result<Vec<Column>, SchemaError> {
    struct_fields(shape, relation)?
        .iter()
        .map(|field| reflect_column(field, relation))
        .collect()
}

fn reflect_column(field: &Field, relation: &str) -> Result<Column, SchemaError> {
    let (inner, depth) = peel_options(field.shape.get());
    if depth > 1 {
        return Err(SchemaError::NestedOption {
            relation: relation.to_string(),
            field: field.name.to_string(),
            depth,
        });
    }

    let pg_type = pg_type_of(inner, field, relation)?;

    let default_attr = field_default(field);
    let has_default = default_attr.is_some();
    let default = default_attr.flatten().map(|s| s.to_string());

    let auto_generated =
        field_has_attr(field, "auto") || is_auto_generated_default(default.as_deref());

    Ok(Column {
        name: column_name(field).to_string(),
        pg_type,
        nullable: depth == 1,
        default,
        has_default,
        primary_key: field_has_attr(field, "pk"),
        unique: field_has_attr(field, "unique"),
        auto_generated,
        doc: join_doc(field.doc),
    })
}

fn reflect_payload(
    shape: &'static Shape,
    relation: &str,
) -> Result<Vec<PayloadField>, SchemaError> {
    struct_fields(shape, relation)?
        .iter()
        .map(|field| {
            let (inner, options) = peel_options(field.shape.get());
            Ok(PayloadField {
                name: column_name(field).to_string(),
                pg_type: pg_type_of(inner, field, relation)?,
                options,
            })
        })
        .collect()
}

fn reflect_relationships(
    table: &str,
    fields: &[Field],
    columns: &[Column],
    relation: &str,
) -> Result<Vec<Relationship>, SchemaError> {
    let pk: Vec<&str> = columns
        .iter()
        .filter(|c| c.primary_key)
        .map(|c| c.name.as_str())
        .collect();

    let mut relationships = Vec::new();
    for (field, column) in fields.iter().zip(columns) {
        let Some(fk_ref) = field_attr_str(field, "fk") else {
            continue;
        };
        let (ref_table, ref_col) =
            parse_fk_reference(fk_ref).ok_or_else(|| SchemaError::InvalidReference {
                relation: relation.to_string(),
                field: field.name.to_string(),
                reference: fk_ref.to_string(),
            })?;

        let is_one_to_one = column.unique || pk == [column.name.as_str()];

        relationships.push(Relationship {
            name: tutordb_sql::fkey_name(table, &[&column.name]),
            columns: vec![column.name.clone()],
            referenced_relation: ref_table.to_string(),
            referenced_columns: vec![ref_col.to_string()],
            is_one_to_one,
        });
    }

    Ok(relationships)
}

fn reflect_returns(shape: &'static Shape, relation: &str) -> Result<Returns, SchemaError> {
    if shape == <()>::SHAPE {
        return Ok(Returns::Void);
    }

    if matches!(&shape.def, facet::Def::List(_))
        && let Some(inner) = shape.inner
        && matches!(inner.ty, Type::User(UserType::Struct(_)))
    {
        return Ok(Returns::SetOf(reflect_columns(inner, relation)?));
    }

    let (inner, _) = peel_options(shape);
    shape_to_pg_type(inner)
        .map(Returns::Scalar)
        .ok_or_else(|| SchemaError::UnsupportedType {
            relation: relation.to_string(),
            field: "<returns>".to_string(),
            ty: shape.to_string(),
        })
}

// =============================================================================
// Attribute helpers
// =============================================================================

fn field_has_attr(field: &Field, key: &str) -> bool {
    field
        .attributes
        .iter()
        .any(|attr| attr.ns == Some("tutordb") && attr.key == key)
}

fn field_attr_str(field: &Field, key: &str) -> Option<&'static str> {
    field.attributes.iter().find_map(|attr| {
        if attr.ns == Some("tutordb") && attr.key == key {
            attr.get_as::<&str>().copied()
        } else {
            None
        }
    })
}

/// `Some(expr)` when the field carries `tutordb::default`; the expression
/// itself is optional.
fn field_default(field: &Field) -> Option<Option<&'static str>> {
    field.attributes.iter().find_map(|attr| {
        if attr.ns == Some("tutordb") && attr.key == "default" {
            match attr.get_as::<Attr>() {
                Some(Attr::Default(expr)) => Some(*expr),
                _ => Some(None),
            }
        } else {
            None
        }
    })
}

/// The stored column name: `tutordb::column` if present, else the field name.
fn column_name(field: &Field) -> &'static str {
    field_attr_str(field, "column").unwrap_or(field.name)
}

/// Whether a default expression makes the database generate identifiers.
pub(crate) fn is_auto_generated_default(default: Option<&str>) -> bool {
    let Some(def) = default else {
        return false;
    };
    let lower = def.to_lowercase();
    lower.contains("nextval(")
        || lower.contains("gen_random_uuid()")
        || lower.contains("uuid_generate_v")
}

/// Parse a foreign key reference string.
///
/// Supports two formats:
/// - `table.column` (dot-separated)
/// - `table(column)` (parentheses)
pub fn parse_fk_reference(fk_ref: &str) -> Option<(&str, &str)> {
    if let Some((table, col)) = fk_ref.split_once('.')
        && !table.is_empty()
        && !col.is_empty()
    {
        return Some((table, col));
    }

    if let Some(paren_idx) = fk_ref.find('(')
        && fk_ref.ends_with(')')
    {
        let table = &fk_ref[..paren_idx];
        let col = &fk_ref[paren_idx + 1..fk_ref.len() - 1];
        if !table.is_empty() && !col.is_empty() {
            return Some((table, col));
        }
    }

    None
}

/// Map a Rust shape to a Postgres type.
///
/// `Jsonb<T>` and bare `facet_value::Value` both map to `jsonb`.
pub fn shape_to_pg_type(shape: &Shape) -> Option<PgType> {
    if shape.decl_id == Jsonb::<()>::SHAPE.decl_id || shape == facet_value::Value::SHAPE {
        return Some(PgType::Jsonb);
    }
    rust_type_to_pg(shape)
}

/// Map a scalar Rust type to a Postgres type.
pub fn rust_type_to_pg(shape: &Shape) -> Option<PgType> {
    if shape == i8::SHAPE || shape == u8::SHAPE || shape == i16::SHAPE {
        Some(PgType::SmallInt)
    } else if shape == u16::SHAPE || shape == i32::SHAPE {
        Some(PgType::Integer)
    } else if shape == u32::SHAPE
        || shape == i64::SHAPE
        || shape == u64::SHAPE
        || shape == isize::SHAPE
        || shape == usize::SHAPE
    {
        Some(PgType::BigInt)
    } else if shape == f32::SHAPE {
        Some(PgType::Real)
    } else if shape == f64::SHAPE {
        Some(PgType::DoublePrecision)
    } else if shape == bool::SHAPE {
        Some(PgType::Boolean)
    } else if shape == String::SHAPE {
        Some(PgType::Text)
    } else if shape == rust_decimal::Decimal::SHAPE {
        Some(PgType::Numeric)
    } else if shape == jiff::Timestamp::SHAPE || shape == jiff::Zoned::SHAPE {
        Some(PgType::Timestamptz)
    } else if shape == jiff::civil::Date::SHAPE {
        Some(PgType::Date)
    } else if shape == chrono::DateTime::<chrono::Utc>::SHAPE
        || shape == chrono::DateTime::<chrono::Local>::SHAPE
        || shape == chrono::NaiveDateTime::SHAPE
    {
        Some(PgType::Timestamptz)
    } else if shape == chrono::NaiveDate::SHAPE {
        Some(PgType::Date)
    } else if shape == uuid::Uuid::SHAPE {
        Some(PgType::Uuid)
    } else {
        None
    }
}
