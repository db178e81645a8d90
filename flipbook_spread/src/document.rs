// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_pagination::{Company, Page, PageNumber, Pagination};
use hashbrown::HashMap;
use tracing::info;

/// Why a document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The page or company data is not valid JSON for the record shape.
    #[error("malformed document data: {0}")]
    Json(#[from] serde_json::Error),
    /// No pages at all.
    #[error("document has no pages")]
    Empty,
    /// Two pages share a number.
    #[error("page {0} appears more than once")]
    Duplicate(PageNumber),
    /// The numbering skips a page or does not start at 0.
    #[error("page numbering has a gap: expected page {expected}, found page {found}")]
    Gap {
        /// The number the next page should have had.
        expected: PageNumber,
        /// The number it had.
        found: PageNumber,
    },
}

/// The read-only page and company store behind a flipbook.
///
/// Pages are sorted and checked once at load time: numbers are unique and
/// dense from 0. Companies are indexed by id.
#[derive(Clone, Debug)]
pub struct Document {
    pagination: Pagination,
    companies: HashMap<String, Company>,
}

impl Document {
    /// Builds a document from records already in memory.
    pub fn new(mut pages: Vec<Page>, companies: Vec<Company>) -> Result<Self, LoadError> {
        if pages.is_empty() {
            return Err(LoadError::Empty);
        }
        pages.sort_by_key(|p| p.number);
        let mut expected = 0;
        for page in &pages {
            if page.number < expected {
                return Err(LoadError::Duplicate(page.number));
            }
            if page.number > expected {
                return Err(LoadError::Gap {
                    expected,
                    found: page.number,
                });
            }
            expected += 1;
        }

        let companies: HashMap<String, Company> =
            companies.into_iter().map(|c| (c.id.clone(), c)).collect();
        let pagination = Pagination::new(pages);
        info!(
            pages = pagination.pages().len(),
            steps = pagination.len(),
            companies = companies.len(),
            "document loaded"
        );
        Ok(Self {
            pagination,
            companies,
        })
    }

    /// Parses a JSON array of pages and a JSON array of companies.
    pub fn from_json(pages: &str, companies: &str) -> Result<Self, LoadError> {
        let pages: Vec<Page> = serde_json::from_str(pages)?;
        let companies: Vec<Company> = serde_json::from_str(companies)?;
        Self::new(pages, companies)
    }

    /// Step and label queries over the pages.
    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// All pages in number order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        self.pagination.pages()
    }

    /// Looks up a company by id.
    #[must_use]
    pub fn company(&self, id: &str) -> Option<&Company> {
        self.companies.get(id)
    }

    /// The company a page refers to, if it refers to a known one.
    #[must_use]
    pub fn company_for(&self, page: &Page) -> Option<&Company> {
        page.related_company.as_deref().and_then(|id| self.company(id))
    }
}
