//! The resource catalog.
//!
//! Every listable resource is described once: its paging limits, the
//! attributes `search` looks at, the equality filters it accepts, its public
//! sort keys, and its field schema. The catalog is built at startup and
//! shared read-only behind an `Arc`.

use std::collections::HashMap;
use std::fmt;

use recollectable_persistence::entities::{
    Banknote, Coin, Collection, CollectionCollectable, CollectorValue, Condition, Country, User,
};
use recollectable_persistence::types::{Entity, PageComputer};
use serde::Serialize;

use crate::dto::{
    BanknoteDto, BanknoteInput, CoinDto, CoinInput, CollectableDto, CollectableInput,
    CollectionDto, CollectionInput, CollectorValueDto, CollectorValueInput, ConditionDto,
    ConditionInput, CountryDto, CountryInput, EntityInput, UserDto, UserInput,
};
use crate::query::{
    ListQuery, PropertyMappingValue, QueryError, ResourceParameters, SortFieldResolver,
    SortMappingTable,
};
use crate::responses::shaping::{FieldProjector, FieldSchema};

/// The resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `/api/coins`
    Coins,
    /// `/api/banknotes`
    Banknotes,
    /// `/api/collections`
    Collections,
    /// `/api/collections/{collectionId}/collectables`
    Collectables,
    /// `/api/users`
    Users,
    /// `/api/countries`
    Countries,
    /// `/api/conditions`
    Conditions,
    /// `/api/collectorvalues`
    CollectorValues,
}

impl ResourceKind {
    /// Every resource kind.
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Coins,
        ResourceKind::Banknotes,
        ResourceKind::Collections,
        ResourceKind::Collectables,
        ResourceKind::Users,
        ResourceKind::Countries,
        ResourceKind::Conditions,
        ResourceKind::CollectorValues,
    ];

    /// The plural name used in routes and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Coins => "coins",
            ResourceKind::Banknotes => "banknotes",
            ResourceKind::Collections => "collections",
            ResourceKind::Collectables => "collectables",
            ResourceKind::Users => "users",
            ResourceKind::Countries => "countries",
            ResourceKind::Conditions => "conditions",
            ResourceKind::CollectorValues => "collectorvalues",
        }
    }

    /// The singular name used in item link relations (`delete_coin`).
    pub fn rel_name(self) -> &'static str {
        match self {
            ResourceKind::Coins => "coin",
            ResourceKind::Banknotes => "banknote",
            ResourceKind::Collections => "collection",
            ResourceKind::Collectables => "collectable",
            ResourceKind::Users => "user",
            ResourceKind::Countries => "country",
            ResourceKind::Conditions => "condition",
            ResourceKind::CollectorValues => "collectorvalue",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging limits, search paths, and filters of one resource.
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    kind: ResourceKind,
    default_page_size: i64,
    pages: PageComputer,
    search_paths: &'static [&'static str],
    filters: &'static [(&'static str, &'static str)],
}

impl ResourceDescriptor {
    /// Describes `kind` with the given default and maximum page sizes.
    pub fn new(kind: ResourceKind, default_page_size: i64, max_page_size: usize) -> Self {
        Self {
            kind,
            default_page_size,
            pages: PageComputer::new(max_page_size),
            search_paths: &[],
            filters: &[],
        }
    }

    /// Attribute paths matched, case-insensitively, by the `search` parameter.
    pub fn with_search(mut self, paths: &'static [&'static str]) -> Self {
        self.search_paths = paths;
        self
    }

    /// Query parameters accepted as case-insensitive equality filters,
    /// as `(parameter, attribute path)` pairs.
    pub fn with_filters(mut self, filters: &'static [(&'static str, &'static str)]) -> Self {
        self.filters = filters;
        self
    }

    /// The described resource.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Page size used when the client sends none.
    pub fn default_page_size(&self) -> i64 {
        self.default_page_size
    }

    /// The page computer bounded by this resource's maximum page size.
    pub fn pages(&self) -> &PageComputer {
        &self.pages
    }

    /// Attribute paths searched by `search`.
    pub fn search_paths(&self) -> &'static [&'static str] {
        self.search_paths
    }

    /// `(parameter, attribute path)` equality filters.
    pub fn filters(&self) -> &'static [(&'static str, &'static str)] {
        self.filters
    }
}

/// Sort tables, field schemas, and descriptors for every resource.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    sorts: SortFieldResolver,
    fields: FieldProjector,
    descriptors: HashMap<ResourceKind, ResourceDescriptor>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource's descriptor, sort table, and field schema.
    pub fn register<R: CatalogResource>(
        &mut self,
        descriptor: ResourceDescriptor,
        sort_table: SortMappingTable,
    ) {
        self.sorts.register_mapping(R::KIND, sort_table);
        self.fields.register::<R::Dto>(R::KIND);
        self.descriptors.insert(R::KIND, descriptor);
    }

    /// The catalog of every resource the API serves.
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register::<Coins>(
            ResourceDescriptor::new(ResourceKind::Coins, 25, 50)
                .with_search(&["Country.Name", "Type", "ReleaseDate"])
                .with_filters(&[("type", "Type"), ("country", "Country.Name")]),
            currency_sort_table(),
        );
        catalog.register::<Banknotes>(
            ResourceDescriptor::new(ResourceKind::Banknotes, 25, 50)
                .with_search(&["Country.Name", "Type", "ReleaseDate"])
                .with_filters(&[("type", "Type"), ("country", "Country.Name")]),
            currency_sort_table(),
        );
        catalog.register::<Collections>(
            ResourceDescriptor::new(ResourceKind::Collections, 10, 25)
                .with_search(&["Type", "Description"])
                .with_filters(&[("type", "Type")]),
            SortMappingTable::new("Type")
                .with_direct("Id")
                .with_direct("Type"),
        );
        catalog.register::<Collectables>(
            ResourceDescriptor::new(ResourceKind::Collectables, 25, 50)
                .with_search(&["Collectable.Country.Name", "Collectable.ReleaseDate"])
                .with_filters(&[("country", "Collectable.Country.Name")]),
            SortMappingTable::new("Country")
                .with_direct("Id")
                .with(
                    "Country",
                    PropertyMappingValue::new(["Collectable.Country.Name"]),
                )
                .with(
                    "ReleaseDate",
                    PropertyMappingValue::new(["Collectable.ReleaseDate"]),
                ),
        );
        catalog.register::<Users>(
            ResourceDescriptor::new(ResourceKind::Users, 10, 25)
                .with_search(&["FirstName", "LastName", "UserName", "Email"]),
            SortMappingTable::new("Name")
                .with_direct("Id")
                .with("Name", PropertyMappingValue::new(["FirstName", "LastName"]))
                .with_direct("Email"),
        );
        catalog.register::<Countries>(
            ResourceDescriptor::new(ResourceKind::Countries, 25, 50).with_search(&["Name"]),
            SortMappingTable::new("Name")
                .with_direct("Id")
                .with_direct("Name"),
        );
        catalog.register::<Conditions>(
            ResourceDescriptor::new(ResourceKind::Conditions, 25, 50).with_search(&["Grade"]),
            SortMappingTable::new("Grade")
                .with_direct("Id")
                .with_direct("Grade"),
        );
        catalog.register::<CollectorValues>(
            ResourceDescriptor::new(ResourceKind::CollectorValues, 25, 50),
            SortMappingTable::new("Id").with_direct("Id"),
        );

        catalog
    }

    /// The sort key resolver.
    pub fn sorts(&self) -> &SortFieldResolver {
        &self.sorts
    }

    /// The field projector.
    pub fn fields(&self) -> &FieldProjector {
        &self.fields
    }

    /// Returns the descriptor of `kind`.
    pub fn descriptor(&self, kind: ResourceKind) -> Result<&ResourceDescriptor, QueryError> {
        self.descriptors
            .get(&kind)
            .ok_or_else(|| QueryError::UnknownResource {
                resource_type: kind.to_string(),
            })
    }

    /// Builds clamped request parameters for `kind` from a decoded query.
    pub fn parameters(
        &self,
        kind: ResourceKind,
        query: ListQuery,
    ) -> Result<ResourceParameters, QueryError> {
        let descriptor = self.descriptor(kind)?;
        let default_order_by = self.sorts.table(kind)?.default_key();
        Ok(ResourceParameters::new(query, descriptor, default_order_by))
    }
}

/// Sort keys shared by coins and banknotes.
fn currency_sort_table() -> SortMappingTable {
    SortMappingTable::new("Value")
        .with_direct("Id")
        .with(
            "Value",
            PropertyMappingValue::new(["Country.Name", "Type", "FaceValue", "ReleaseDate"]),
        )
        .with("Country", PropertyMappingValue::new(["Country.Name"]))
        .with_direct("ReleaseDate")
}

/// Binds a resource kind to its entity and transfer objects.
pub trait CatalogResource: Send + Sync + 'static {
    /// The stored entity.
    type Entity: Entity;
    /// The transfer object returned to clients.
    type Dto: Serialize + FieldSchema + for<'a> From<&'a Self::Entity> + Send;
    /// The body accepted by create, update, and patch.
    type Input: EntityInput<Entity = Self::Entity>;
    /// The resource kind.
    const KIND: ResourceKind;
}

macro_rules! catalog_resource {
    ($(#[$doc:meta])* $name:ident, $entity:ty, $dto:ty, $input:ty, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl CatalogResource for $name {
            type Entity = $entity;
            type Dto = $dto;
            type Input = $input;
            const KIND: ResourceKind = ResourceKind::$kind;
        }
    };
}

catalog_resource!(
    /// Coins.
    Coins, Coin, CoinDto, CoinInput, Coins
);
catalog_resource!(
    /// Banknotes.
    Banknotes, Banknote, BanknoteDto, BanknoteInput, Banknotes
);
catalog_resource!(
    /// Collections.
    Collections, Collection, CollectionDto, CollectionInput, Collections
);
catalog_resource!(
    /// Collectables held in a collection.
    Collectables, CollectionCollectable, CollectableDto, CollectableInput, Collectables
);
catalog_resource!(
    /// Users.
    Users, User, UserDto, UserInput, Users
);
catalog_resource!(
    /// Countries.
    Countries, Country, CountryDto, CountryInput, Countries
);
catalog_resource!(
    /// Conditions.
    Conditions, Condition, ConditionDto, ConditionInput, Conditions
);
catalog_resource!(
    /// Collector values per grade.
    CollectorValues, CollectorValue, CollectorValueDto, CollectorValueInput, CollectorValues
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_registers_every_kind() {
        let catalog = ResourceCatalog::standard();
        for kind in ResourceKind::ALL {
            assert!(catalog.descriptor(kind).is_ok(), "{kind} has no descriptor");
            assert!(catalog.sorts().validate(kind, ""), "{kind} has no sort table");
            assert!(catalog.fields().validate(kind, "Id"), "{kind} has no Id field");
        }
    }

    #[test]
    fn test_sort_paths_are_declared_by_entities() {
        fn check<R: CatalogResource>(catalog: &ResourceCatalog) {
            let table = catalog.sorts().table(R::KIND).unwrap();
            for key in table.keys() {
                for instruction in catalog.sorts().resolve(R::KIND, key).unwrap() {
                    assert!(
                        R::Entity::resolve_attribute(&instruction.path).is_some(),
                        "{} sorts by undeclared {}",
                        R::KIND,
                        instruction.path
                    );
                }
            }
        }

        let catalog = ResourceCatalog::standard();
        check::<Coins>(&catalog);
        check::<Banknotes>(&catalog);
        check::<Collections>(&catalog);
        check::<Collectables>(&catalog);
        check::<Users>(&catalog);
        check::<Countries>(&catalog);
        check::<Conditions>(&catalog);
        check::<CollectorValues>(&catalog);
    }

    #[test]
    fn test_search_and_filter_paths_are_declared() {
        fn check<R: CatalogResource>(catalog: &ResourceCatalog) {
            let descriptor = catalog.descriptor(R::KIND).unwrap();
            let filter_paths = descriptor.filters().iter().map(|(_, path)| *path);
            for path in descriptor.search_paths().iter().copied().chain(filter_paths) {
                assert!(
                    R::Entity::resolve_attribute(path).is_some(),
                    "{} filters on undeclared {}",
                    R::KIND,
                    path
                );
            }
        }

        let catalog = ResourceCatalog::standard();
        check::<Coins>(&catalog);
        check::<Banknotes>(&catalog);
        check::<Collections>(&catalog);
        check::<Collectables>(&catalog);
        check::<Users>(&catalog);
        check::<Countries>(&catalog);
        check::<Conditions>(&catalog);
        check::<CollectorValues>(&catalog);
    }

    #[test]
    fn test_paging_limits() {
        let catalog = ResourceCatalog::standard();
        let users = catalog.descriptor(ResourceKind::Users).unwrap();
        assert_eq!(users.default_page_size(), 10);
        assert_eq!(users.pages().max_page_size(), 25);

        let coins = catalog.descriptor(ResourceKind::Coins).unwrap();
        assert_eq!(coins.default_page_size(), 25);
        assert_eq!(coins.pages().max_page_size(), 50);
    }

    #[test]
    fn test_rel_names() {
        assert_eq!(ResourceKind::Countries.rel_name(), "country");
        assert_eq!(ResourceKind::Collectables.to_string(), "collectables");
        assert_eq!(ResourceKind::CollectorValues.as_str(), "collectorvalues");
        assert_eq!(ResourceKind::CollectorValues.rel_name(), "collectorvalue");
    }
}
