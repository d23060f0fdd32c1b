// ABOUTME: The item element: builder-validated aggregate of item children.
// ABOUTME: Enforces the title-or-description invariant at build time.

use serde::Serialize;

use crate::dates::RssDate;
use crate::error::{Result, RssError};
use crate::extension::Extension;
use crate::leaves::{Category, Enclosure, Guid, Source};
use crate::scalars::{Author, Comments, Description, Link, Title};

/// An RSS item. At least one of title or description must be present;
/// everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    title: Option<Title>,
    description: Option<Description>,
    link: Option<Link>,
    author: Option<Author>,
    comments: Option<Comments>,
    enclosure: Option<Enclosure>,
    guid: Option<Guid>,
    pub_date: Option<RssDate>,
    source: Option<Source>,
    categories: Vec<Category>,
    extensions: Vec<Extension>,
}

impl Item {
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn comments(&self) -> Option<&Comments> {
        self.comments.as_ref()
    }

    pub fn enclosure(&self) -> Option<&Enclosure> {
        self.enclosure.as_ref()
    }

    pub fn guid(&self) -> Option<&Guid> {
        self.guid.as_ref()
    }

    pub fn pub_date(&self) -> Option<&RssDate> {
        self.pub_date.as_ref()
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Looks up a category by its value.
    pub fn category(&self, value: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.value() == value)
    }
}

/// Accumulates item fields and validates on build. The builder is the only
/// construction path, so an invalid item can never exist.
#[derive(Debug, Default)]
pub struct ItemBuilder {
    title: Option<Title>,
    description: Option<Description>,
    link: Option<Link>,
    author: Option<Author>,
    comments: Option<Comments>,
    enclosure: Option<Enclosure>,
    guid: Option<Guid>,
    pub_date: Option<RssDate>,
    source: Option<Source>,
    categories: Vec<Category>,
    extensions: Vec<Extension>,
}

impl ItemBuilder {
    pub fn title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn comments(mut self, comments: Comments) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn enclosure(mut self, enclosure: Enclosure) -> Self {
        self.enclosure = Some(enclosure);
        self
    }

    pub fn guid(mut self, guid: Guid) -> Self {
        self.guid = Some(guid);
        self
    }

    pub fn pub_date(mut self, pub_date: RssDate) -> Self {
        self.pub_date = Some(pub_date);
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn build(self) -> Result<Item> {
        if self.title.is_none() && self.description.is_none() {
            return Err(RssError::invalid(
                "item elements MUST contain either a title or description element",
            ));
        }
        Ok(Item {
            title: self.title,
            description: self.description,
            link: self.link,
            author: self.author,
            comments: self.comments,
            enclosure: self.enclosure,
            guid: self.guid,
            pub_date: self.pub_date,
            source: self.source,
            categories: self.categories,
            extensions: self.extensions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_or_description_required() {
        assert!(Item::builder().build().is_err());
        assert!(Item::builder()
            .title(Title::new("First Article").unwrap())
            .build()
            .is_ok());
        assert!(Item::builder()
            .description(Description::new("summary"))
            .build()
            .is_ok());
    }

    #[test]
    fn test_category_lookup() {
        let item = Item::builder()
            .title(Title::new("t").unwrap())
            .category(Category::new("Funky", None).unwrap())
            .build()
            .unwrap();
        assert!(item.category("Funky").is_some());
        assert!(item.category("Bunky").is_none());
    }
}
