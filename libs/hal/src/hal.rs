use crate::config::{CompiledConfig, HalConfig};
use crate::error::Result;
use crate::media_type::MediaType;
use halcyon_builder::{DescriptionBuilder, ResourceRegistry};
use halcyon_format::{render_json, render_xml, write_json, write_xml};
use halcyon_models::ResourceDescription;
use halcyon_openapi::{Schema, SchemaGenerator, SchemaType};
use serde::Serialize;
use std::io::Write;

/// A registry together with compiled options for every stage
#[derive(Debug)]
pub struct Hal {
    registry: ResourceRegistry,
    config: CompiledConfig,
}

impl Hal {
    pub fn new(registry: ResourceRegistry) -> Self {
        Self {
            registry,
            config: CompiledConfig::default(),
        }
    }

    pub fn with_config(registry: ResourceRegistry, config: &HalConfig) -> Result<Self> {
        Ok(Self {
            registry,
            config: config.compile()?,
        })
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CompiledConfig {
        &self.config
    }

    pub fn describe<T: Serialize + 'static>(&self, instance: &T) -> Result<ResourceDescription> {
        let builder = DescriptionBuilder::with_options(&self.registry, self.config.build.clone());
        Ok(builder.build(instance)?)
    }

    pub fn render<T: Serialize + 'static>(&self, instance: &T, media_type: MediaType) -> Result<String> {
        let description = self.describe(instance)?;
        self.render_description(&description, media_type)
    }

    pub fn render_description(
        &self,
        description: &ResourceDescription,
        media_type: MediaType,
    ) -> Result<String> {
        tracing::debug!(
            media_type = media_type.as_str(),
            state_type = description.state_type(),
            "rendering resource"
        );
        let rendered = match media_type {
            MediaType::HalJson => render_json(description, &self.config.json)?,
            MediaType::HalXml => render_xml(description, &self.config.xml)?,
        };
        Ok(rendered)
    }

    pub fn write<T: Serialize + 'static, W: Write>(
        &self,
        instance: &T,
        media_type: MediaType,
        writer: W,
    ) -> Result<()> {
        let description = self.describe(instance)?;
        match media_type {
            MediaType::HalJson => write_json(&description, &self.config.json, writer)?,
            MediaType::HalXml => write_xml(&description, &self.config.xml, writer)?,
        }
        Ok(())
    }

    pub fn schema<T: SchemaType + 'static>(&self) -> Result<Schema> {
        let generator = SchemaGenerator::with_options(&self.registry, self.config.schema);
        Ok(generator.generate::<T>()?)
    }
}
