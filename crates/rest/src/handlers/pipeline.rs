//! The shared list pipeline.
//!
//! Preparing a query resolves the sort expression and the `fields`
//! selection, and builds the filter specification. All three can fail, and
//! they do so before the store is touched. Executing the prepared query
//! reads the filtered and sorted sequence once and slices the requested page
//! out of it.

use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::specification::Specification;
use recollectable_persistence::types::{Entity, Page, SortInstruction};
use tracing::debug;

use crate::error::RestResult;
use crate::query::ResourceParameters;
use crate::resources::{CatalogResource, ResourceCatalog, ResourceDescriptor};
use crate::responses::FieldSelection;

/// A validated list query, ready to run against storage.
#[derive(Debug)]
pub struct PreparedQuery<R: CatalogResource> {
    specification: Specification<R::Entity>,
    sort: Vec<SortInstruction>,
    selection: FieldSelection,
}

impl<R: CatalogResource> PreparedQuery<R> {
    /// Validates `params` for `R` and builds its specification.
    ///
    /// # Errors
    ///
    /// * `RestError::UnknownSortKey` - If `orderBy` has an unmapped key
    /// * `RestError::UnknownField` - If `fields` names an unknown field
    pub fn prepare(catalog: &ResourceCatalog, params: &ResourceParameters) -> RestResult<Self> {
        let sort = catalog.sorts().resolve(R::KIND, params.order_by())?;
        let selection = catalog.fields().select(R::KIND, params.fields())?;
        let descriptor = catalog.descriptor(R::KIND)?;
        let specification = filter_specification(descriptor, params)?;

        Ok(Self {
            specification,
            sort,
            selection,
        })
    }

    /// Narrows the query to entities that also satisfy `scope`.
    pub fn scoped(mut self, scope: Specification<R::Entity>) -> Self {
        self.specification = scope.and(self.specification);
        self
    }

    /// The specification the store will evaluate.
    pub fn specification(&self) -> &Specification<R::Entity> {
        &self.specification
    }

    /// The resolved sort instructions.
    pub fn sort(&self) -> &[SortInstruction] {
        &self.sort
    }

    /// Runs the query and slices the requested page.
    ///
    /// Returns the page together with the validated field selection.
    pub async fn execute<S: ResourceStorage>(
        self,
        storage: &S,
        catalog: &ResourceCatalog,
        params: &ResourceParameters,
    ) -> RestResult<(Page<R::Entity>, FieldSelection)> {
        let descriptor = catalog.descriptor(R::KIND)?;

        debug!(
            resource = %R::KIND,
            filter = %self.specification,
            sort = ?self.sort,
            "Querying storage"
        );
        let entities = storage.query(&self.specification, &self.sort).await?;

        let page_size = i64::try_from(params.page_size()).unwrap_or(i64::MAX);
        let page = descriptor
            .pages()
            .create(entities, params.page(), page_size);

        debug!(
            resource = %R::KIND,
            total = page.total_count(),
            returned = page.len(),
            "Page computed"
        );

        Ok((page, self.selection))
    }
}

/// Builds the search and equality filters of `params` as one specification.
///
/// Filters are combined with AND; `search` matches any of the resource's
/// search paths, and is ignored by resources that declare none.
pub fn filter_specification<E: Entity>(
    descriptor: &ResourceDescriptor,
    params: &ResourceParameters,
) -> RestResult<Specification<E>> {
    let mut specification = Specification::all();

    for (name, value) in params.filters() {
        let path = descriptor
            .filters()
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, path)| *path);
        if let Some(path) = path {
            specification = specification.and(Specification::equals_ignore_case(path, value)?);
        }
    }

    if !params.search().is_empty() && !descriptor.search_paths().is_empty() {
        specification = specification.and(Specification::contains_any_ignore_case(
            descriptor.search_paths(),
            params.search(),
        )?);
    }

    Ok(specification)
}
