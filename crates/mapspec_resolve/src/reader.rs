//! Specification reader.
//!
//! Reading walks the function block properties of an information model in
//! declaration order. Each function block is fetched for the configured
//! platform first and, if that yields nothing, as platform-agnostic content.
//! A function block that cannot be found either way stays in the result as an
//! unresolved entry. Functions declared through a `functions` stereotype are
//! collected into one [`FunctionLibrary`] per read.

use crate::config::ReaderConfig;
use crate::error::{ReadCause, ReadError, ReadResult};
use crate::specification::MappingSpecification;
use indexmap::IndexMap;
use mapspec_core::{FunctionblockModel, Infomodel, ModelId};
use mapspec_library::FunctionLibrary;
use mapspec_repository::{ContentKind, ModelContent, ModelRepository, RepositoryError};

/// Stereotype carrying scripting function declarations
pub const FUNCTIONS_STEREOTYPE: &str = "functions";

/// Stereotype attribute naming the function namespace
pub const NAMESPACE_ATTRIBUTE: &str = "_namespace";

/// Reader bound to a repository and a configuration
#[derive(Debug, Clone)]
pub struct SpecificationReader<R> {
    repository: R,
    config: ReaderConfig,
}

impl<R: ModelRepository> SpecificationReader<R> {
    /// Create a reader
    #[must_use]
    pub fn new(repository: R, config: ReaderConfig) -> Self {
        Self { repository, config }
    }

    /// The reader configuration
    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// The repository models are fetched from
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Read the mapping specification.
    ///
    /// Every call starts from an empty function library.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::NotFound`] if the information model is missing,
    /// [`ReadError::CannotRead`] for any other failure
    pub fn read(&self) -> ReadResult<MappingSpecification> {
        read_specification(&self.config, &self.repository)
    }
}

/// Read a mapping specification from a repository
///
/// # Errors
///
/// Returns [`ReadError::NotFound`] if the information model is missing,
/// [`ReadError::CannotRead`] for any other failure
pub fn read_specification(
    config: &ReaderConfig,
    repository: &dyn ModelRepository,
) -> ReadResult<MappingSpecification> {
    let platform_key = config.platform_key();
    let model_id = ModelId::from_pretty_format(&config.model_id)?;
    tracing::info!(
        model = %model_id,
        platform = platform_key.unwrap_or("-"),
        "reading mapping specification"
    );

    let infomodel =
        fetch_infomodel(repository, &model_id, platform_key)?.ok_or_else(|| ReadError::NotFound {
            model_id: model_id.pretty_format(),
            platform_key: platform_key.map(str::to_string),
        })?;

    let mut library = FunctionLibrary::new();
    let mut functionblocks = IndexMap::with_capacity(infomodel.functionblocks.len());

    for property in &infomodel.functionblocks {
        let fb_id = property.property_type.as_model_id().ok_or_else(|| {
            ReadCause::NotAModelReference {
                property: property.name.clone(),
            }
        })?;

        let functionblock = resolve_functionblock(repository, fb_id, platform_key)?;
        match &functionblock {
            Some(fbm) => register_functions(&mut library, fbm),
            None => {
                tracing::warn!(
                    property = %property.name,
                    model = %fb_id,
                    "function block not found, leaving it unresolved"
                );
            }
        }
        functionblocks.insert(property.name.clone(), functionblock);
    }

    tracing::info!(
        model = %model_id,
        functionblocks = functionblocks.len(),
        namespaces = library.len(),
        functions = library.function_count(),
        "mapping specification read"
    );
    Ok(MappingSpecification::new(infomodel, functionblocks, library))
}

/// Fetch a function block for the platform, falling back to platform-agnostic
/// content when the platform has none.
fn resolve_functionblock(
    repository: &dyn ModelRepository,
    id: &ModelId,
    platform_key: Option<&str>,
) -> ReadResult<Option<FunctionblockModel>> {
    let functionblock = fetch_functionblock(repository, id, platform_key)?;
    match (functionblock, platform_key) {
        (Some(fbm), _) => Ok(Some(fbm)),
        (None, Some(key)) => {
            tracing::warn!(
                model = %id,
                platform = key,
                "no platform content for function block, falling back to platform-agnostic content"
            );
            fetch_functionblock(repository, id, None)
        }
        // already platform-agnostic
        (None, None) => Ok(None),
    }
}

fn fetch_infomodel(
    repository: &dyn ModelRepository,
    id: &ModelId,
    platform_key: Option<&str>,
) -> ReadResult<Option<Infomodel>> {
    tracing::debug!(model = %id, platform = platform_key.unwrap_or("-"), "fetching information model");
    match repository.fetch(id, ContentKind::Infomodel, platform_key)? {
        Some(ModelContent::Infomodel(model)) => Ok(Some(model)),
        Some(other) => Err(unexpected(id, ContentKind::Infomodel, &other).into()),
        None => Ok(None),
    }
}

fn fetch_functionblock(
    repository: &dyn ModelRepository,
    id: &ModelId,
    platform_key: Option<&str>,
) -> ReadResult<Option<FunctionblockModel>> {
    tracing::debug!(model = %id, platform = platform_key.unwrap_or("-"), "fetching function block");
    match repository.fetch(id, ContentKind::Functionblock, platform_key)? {
        Some(ModelContent::Functionblock(model)) => Ok(Some(model)),
        Some(other) => Err(unexpected(id, ContentKind::Functionblock, &other).into()),
        None => Ok(None),
    }
}

fn unexpected(id: &ModelId, expected: ContentKind, found: &ModelContent) -> RepositoryError {
    RepositoryError::UnexpectedContent {
        id: id.clone(),
        expected,
        found: found.kind(),
    }
}

/// Register the functions declared by a function block's `functions`
/// stereotype. A missing `_namespace` attribute means the empty namespace.
fn register_functions(library: &mut FunctionLibrary, functionblock: &FunctionblockModel) {
    let Some(stereotype) = functionblock.stereotype(FUNCTIONS_STEREOTYPE) else {
        return;
    };

    let namespace = stereotype.attribute(NAMESPACE_ATTRIBUTE).unwrap_or_default();
    let functions = library.get_or_create(namespace);
    for (name, body) in &stereotype.attributes {
        if name.eq_ignore_ascii_case(NAMESPACE_ATTRIBUTE) {
            continue;
        }
        functions.add_function(name.clone(), body.clone());
    }

    tracing::debug!(
        model = %functionblock.id,
        namespace,
        functions = functions.len(),
        "registered scripting functions"
    );
}
