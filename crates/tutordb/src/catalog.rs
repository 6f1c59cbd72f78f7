//! Catalog assembly and by-name lookup.

use indexmap::IndexMap;
use tracing::{debug, warn};
use tutordb_schema::{
    CompositeType, CompositeTypeDef, DEFAULT_SCHEMA, EnumDef, EnumType, Function, FunctionDef,
    FunctionShape, SchemaGroup, Table, TableDef, TableShape, View, ViewDef,
};

use crate::Error;
use crate::verify::verify;

/// Every registered table, view, function, enum and composite type,
/// grouped by schema.
///
/// Schemas and the entries inside them are sorted by name, so two catalogs
/// assembled from the same registrations are equal regardless of link order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub schemas: IndexMap<String, SchemaGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the catalog from inventory and verify it.
    ///
    /// Each violation is logged before the whole set is returned as
    /// [`Error::Invalid`].
    pub fn collect() -> Result<Self, Error> {
        let catalog = Self::assemble()?;

        let violations = verify(&catalog);
        if violations.is_empty() {
            return Ok(catalog);
        }

        for violation in &violations {
            warn!(%violation, "catalog violation");
        }
        Err(Error::Invalid(violations))
    }

    /// Assemble the catalog from inventory without verifying it.
    pub fn assemble() -> Result<Self, Error> {
        let mut catalog = Self::new();

        for def in inventory::iter::<TableDef> {
            catalog.insert_table(def.to_table()?)?;
        }
        for def in inventory::iter::<ViewDef> {
            catalog.insert_view(def.to_view()?)?;
        }
        for def in inventory::iter::<FunctionDef> {
            catalog.insert_function(def.to_function()?)?;
        }
        for def in inventory::iter::<EnumDef> {
            catalog.insert_enum(def.to_enum()?)?;
        }
        for def in inventory::iter::<CompositeTypeDef> {
            catalog.insert_composite_type(def.to_composite_type()?)?;
        }

        catalog.sort();

        debug!(
            schemas = catalog.schemas.len(),
            tables = catalog.tables().count(),
            functions = catalog
                .schemas
                .values()
                .map(|g| g.functions.len())
                .sum::<usize>(),
            "assembled catalog"
        );

        Ok(catalog)
    }

    fn group_mut(&mut self, schema: &str) -> &mut SchemaGroup {
        self.schemas
            .entry(schema.to_string())
            .or_insert_with(|| SchemaGroup::new(schema))
    }

    pub fn insert_table(&mut self, table: Table) -> Result<(), Error> {
        let schema = table.schema.clone();
        let group = self.group_mut(&schema);
        insert_unique(&mut group.tables, "table", &schema, table.name.clone(), table)
    }

    pub fn insert_view(&mut self, view: View) -> Result<(), Error> {
        let schema = view.schema.clone();
        let group = self.group_mut(&schema);
        insert_unique(&mut group.views, "view", &schema, view.name.clone(), view)
    }

    pub fn insert_function(&mut self, function: Function) -> Result<(), Error> {
        let schema = function.schema.clone();
        let group = self.group_mut(&schema);
        insert_unique(
            &mut group.functions,
            "function",
            &schema,
            function.name.clone(),
            function,
        )
    }

    pub fn insert_enum(&mut self, enum_type: EnumType) -> Result<(), Error> {
        let schema = enum_type.schema.clone();
        let group = self.group_mut(&schema);
        insert_unique(
            &mut group.enums,
            "enum",
            &schema,
            enum_type.name.clone(),
            enum_type,
        )
    }

    pub fn insert_composite_type(&mut self, composite: CompositeType) -> Result<(), Error> {
        let schema = composite.schema.clone();
        let group = self.group_mut(&schema);
        insert_unique(
            &mut group.composite_types,
            "composite type",
            &schema,
            composite.name.clone(),
            composite,
        )
    }

    /// Sort schemas, and every map inside them, by name.
    pub fn sort(&mut self) {
        self.schemas.sort_keys();
        for group in self.schemas.values_mut() {
            group.tables.sort_keys();
            group.views.sort_keys();
            group.functions.sort_keys();
            group.enums.sort_keys();
            group.composite_types.sort_keys();
        }
    }

    /// All tables across all schemas.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.schemas.values().flat_map(|g| g.tables.values())
    }

    pub fn schema(&self, name: &str) -> Result<&SchemaGroup, Error> {
        self.schemas
            .get(name)
            .ok_or_else(|| Error::UnknownSchema(name.to_string()))
    }

    /// Look up a table in the default schema.
    pub fn table(&self, name: &str) -> Result<&Table, Error> {
        self.table_in(DEFAULT_SCHEMA, name)
    }

    pub fn table_in(&self, schema: &str, name: &str) -> Result<&Table, Error> {
        self.schema(schema)?
            .tables
            .get(name)
            .ok_or_else(|| Error::UnknownTable {
                schema: schema.to_string(),
                name: name.to_string(),
            })
    }

    /// The metadata of a typed table.
    pub fn table_of<T: TableShape>(&self) -> Result<&Table, Error> {
        self.table_in(T::SCHEMA, T::NAME)
    }

    pub fn view(&self, name: &str) -> Result<&View, Error> {
        self.view_in(DEFAULT_SCHEMA, name)
    }

    pub fn view_in(&self, schema: &str, name: &str) -> Result<&View, Error> {
        self.schema(schema)?
            .views
            .get(name)
            .ok_or_else(|| Error::UnknownView {
                schema: schema.to_string(),
                name: name.to_string(),
            })
    }

    pub fn function(&self, name: &str) -> Result<&Function, Error> {
        self.function_in(DEFAULT_SCHEMA, name)
    }

    pub fn function_in(&self, schema: &str, name: &str) -> Result<&Function, Error> {
        self.schema(schema)?
            .functions
            .get(name)
            .ok_or_else(|| Error::UnknownFunction {
                schema: schema.to_string(),
                name: name.to_string(),
            })
    }

    /// The metadata of a typed function.
    pub fn function_of<F: FunctionShape>(&self) -> Result<&Function, Error> {
        self.function_in(F::SCHEMA, F::NAME)
    }

    pub fn enum_type(&self, name: &str) -> Result<&EnumType, Error> {
        self.enum_type_in(DEFAULT_SCHEMA, name)
    }

    pub fn enum_type_in(&self, schema: &str, name: &str) -> Result<&EnumType, Error> {
        self.schema(schema)?
            .enums
            .get(name)
            .ok_or_else(|| Error::UnknownEnum {
                schema: schema.to_string(),
                name: name.to_string(),
            })
    }

    pub fn composite_type(&self, name: &str) -> Result<&CompositeType, Error> {
        self.composite_type_in(DEFAULT_SCHEMA, name)
    }

    pub fn composite_type_in(&self, schema: &str, name: &str) -> Result<&CompositeType, Error> {
        self.schema(schema)?
            .composite_types
            .get(name)
            .ok_or_else(|| Error::UnknownCompositeType {
                schema: schema.to_string(),
                name: name.to_string(),
            })
    }

    /// Resolve a list of configured table names up front, failing on the
    /// first one the catalog does not know.
    pub fn require_tables<'a>(
        &self,
        schema: &str,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), Error> {
        for name in names {
            self.table_in(schema, name)?;
        }
        Ok(())
    }
}

fn insert_unique<T>(
    map: &mut IndexMap<String, T>,
    kind: &'static str,
    schema: &str,
    name: String,
    value: T,
) -> Result<(), Error> {
    if map.contains_key(&name) {
        return Err(Error::Duplicate {
            kind,
            schema: schema.to_string(),
            name,
        });
    }
    map.insert(name, value);
    Ok(())
}
