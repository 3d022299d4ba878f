//! Typed views of the four site collections.
//!
//! Each entity embeds the [`OrderedCore`] and keeps unrecognised JSON keys
//! in `extra`, so converting a stored [`Record`](super::Record) into an entity and back
//! loses nothing. Entity-specific cleanup lives in [`Sanitize`]; ordering
//! rules stay in [`crate::ordering`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{ordered_via_core, OrderedCore};

/// Field cleanup applied to a record before it is stored.
pub trait Sanitize {
    fn sanitize(&mut self);
}

/// A product in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    pub core: OrderedCore,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A service offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(flatten)]
    pub core: OrderedCore,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A member of the team page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(flatten)]
    pub core: OrderedCore,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bio: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub photo: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A research article or publication.
///
/// `related_products` holds product ids as plain strings; they are never
/// resolved against the products collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchArticle {
    #[serde(flatten)]
    pub core: OrderedCore,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_products: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

ordered_via_core!(Product, Service, TeamMember, ResearchArticle);

impl Sanitize for Product {
    fn sanitize(&mut self) {
        clean_core(&mut self.core);
        trim(&mut self.name);
        trim(&mut self.category);
        trim(&mut self.description);
        clean_list(&mut self.images);
        clean_list(&mut self.features);
    }
}

impl Sanitize for Service {
    fn sanitize(&mut self) {
        clean_core(&mut self.core);
        trim(&mut self.title);
        trim(&mut self.description);
        trim(&mut self.icon);
        clean_list(&mut self.highlights);
    }
}

impl Sanitize for TeamMember {
    fn sanitize(&mut self) {
        clean_core(&mut self.core);
        trim(&mut self.name);
        trim(&mut self.role);
        trim(&mut self.bio);
        trim(&mut self.photo);
        clean_list(&mut self.links);
    }
}

impl Sanitize for ResearchArticle {
    fn sanitize(&mut self) {
        clean_core(&mut self.core);
        trim(&mut self.title);
        trim(&mut self.summary);
        trim(&mut self.published_at);
        clean_list(&mut self.authors);
        clean_list(&mut self.related_products);
        dedup_keep_first(&mut self.related_products);
    }
}

fn clean_core(core: &mut OrderedCore) {
    trim(&mut core.id);
}

fn trim(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trim every entry and drop the blank ones.
fn clean_list(values: &mut Vec<String>) {
    values.iter_mut().for_each(trim);
    values.retain(|value| !value.is_empty());
}

fn dedup_keep_first(values: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    values.retain(|value| seen.insert(value.clone()));
}
