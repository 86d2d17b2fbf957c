//! PDF outline generation built on top of `lopdf`.

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::pdf::SectionPage;

/// Errors that can occur while embedding bookmarks into a rendered PDF document.
#[derive(Debug)]
pub enum BookmarkError {
    /// The PDF bytes could not be parsed by `lopdf`.
    Parse(lopdf::Error),
    /// A required catalog entry was missing from the document trailer.
    MissingCatalog,
    /// The catalog object was not a dictionary, preventing outline injection.
    InvalidCatalog,
    /// A recorded start page does not exist in the rendered document.
    MissingPage {
        /// Title of the part whose page is missing.
        title: String,
        /// The requested (1-indexed) page number that could not be resolved.
        page_number: usize,
    },
}

impl From<lopdf::Error> for BookmarkError {
    fn from(err: lopdf::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<std::io::Error> for BookmarkError {
    fn from(err: std::io::Error) -> Self {
        Self::Parse(err.into())
    }
}

impl std::fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Failed to parse PDF bytes: {err}"),
            Self::MissingCatalog => write!(f, "PDF catalog entry is missing"),
            Self::InvalidCatalog => write!(f, "PDF catalog entry is not a dictionary"),
            Self::MissingPage { title, page_number } => write!(
                f,
                "'{}' starts on page {}, which the document does not contain",
                title, page_number
            ),
        }
    }
}

impl std::error::Error for BookmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::MissingCatalog | Self::InvalidCatalog | Self::MissingPage { .. } => None,
        }
    }
}

/// Adds a flat outline with one entry per recorded part of the manual.
///
/// Each entry gets a `/Dest [page /Fit]` pointing at the page the part starts
/// on.  Parts that were never laid out are skipped; with nothing to point at
/// the bytes are returned unchanged.
pub fn apply_section_bookmarks(
    pdf_bytes: &[u8],
    section_pages: &[SectionPage],
) -> Result<Vec<u8>, BookmarkError> {
    let mut document = Document::load_mem(pdf_bytes)?;
    let pages = document.get_pages();

    let targets = section_pages
        .iter()
        .filter_map(|section| section.page.map(|page| (section.title.as_str(), page)))
        .map(|(title, page_number)| {
            u32::try_from(page_number)
                .ok()
                .and_then(|number| pages.get(&number).copied())
                .map(|page| (title, page))
                .ok_or_else(|| BookmarkError::MissingPage {
                    title: title.to_owned(),
                    page_number,
                })
        })
        .collect::<Result<Vec<(&str, ObjectId)>, _>>()?;
    if targets.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let catalog_id = document
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| BookmarkError::MissingCatalog)?;

    let outlines_id = document.new_object_id();
    let item_ids: Vec<ObjectId> = targets.iter().map(|_| document.new_object_id()).collect();
    for (index, (title, page)) in targets.iter().enumerate() {
        let mut item = Dictionary::new();
        item.set("Title", Object::string_literal(*title));
        item.set(
            "Dest",
            Object::Array(vec![Object::Reference(*page), Object::Name(b"Fit".to_vec())]),
        );
        item.set("Parent", Object::Reference(outlines_id));
        if let Some(previous) = index.checked_sub(1) {
            item.set("Prev", Object::Reference(item_ids[previous]));
        }
        if let Some(next) = item_ids.get(index + 1) {
            item.set("Next", Object::Reference(*next));
        }
        document
            .objects
            .insert(item_ids[index], Object::Dictionary(item));
    }

    let mut outlines = Dictionary::new();
    outlines.set("Type", Object::Name(b"Outlines".to_vec()));
    outlines.set("Count", Object::Integer(item_ids.len() as i64));
    outlines.set("First", Object::Reference(item_ids[0]));
    outlines.set("Last", Object::Reference(item_ids[item_ids.len() - 1]));
    document
        .objects
        .insert(outlines_id, Object::Dictionary(outlines));

    document
        .objects
        .get_mut(&catalog_id)
        .ok_or(BookmarkError::MissingCatalog)?
        .as_dict_mut()
        .map_err(|_| BookmarkError::InvalidCatalog)?
        .set("Outlines", Object::Reference(outlines_id));

    let mut buffer = Vec::new();
    document.save_to(&mut buffer).map_err(BookmarkError::from)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_pdf(page_count: i64) -> Vec<u8> {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let mut kids = Vec::new();
        for _ in 0..page_count {
            let mut page = Dictionary::new();
            page.set("Type", Object::Name(b"Page".to_vec()));
            page.set("Parent", Object::Reference(pages_id));
            page.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            );
            kids.push(Object::Reference(document.add_object(page)));
        }

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Count", Object::Integer(page_count));
        pages.set("Kids", Object::Array(kids));
        document
            .objects
            .insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = document.add_object(catalog);
        document.trailer.set("Root", Object::Reference(catalog_id));

        let mut bytes = Vec::new();
        document.save_to(&mut bytes).unwrap();
        bytes
    }

    fn part(title: &str, page: Option<usize>) -> SectionPage {
        SectionPage {
            title: title.to_owned(),
            page,
        }
    }

    fn outline_count(bytes: &[u8]) -> i64 {
        let document = Document::load_mem(bytes).unwrap();
        let catalog_id = document.trailer.get(b"Root").unwrap().as_reference().unwrap();
        let catalog = document.get_object(catalog_id).unwrap().as_dict().unwrap();
        let outlines_id = catalog.get(b"Outlines").unwrap().as_reference().unwrap();
        let outlines = document.get_object(outlines_id).unwrap().as_dict().unwrap();
        outlines.get(b"Count").unwrap().as_i64().unwrap()
    }

    #[test]
    fn adds_one_entry_per_laid_out_part() {
        let parts = [
            part("TABLE OF CONTENTS", Some(1)),
            part("LAB 1: BASIC DATA TYPES AND TYPE CONVERSION", Some(2)),
            part("COURSE SUMMARY AND CONCLUSION", None),
        ];
        let bytes = apply_section_bookmarks(&blank_pdf(2), &parts).unwrap();
        assert_eq!(outline_count(&bytes), 2);
    }

    #[test]
    fn nothing_laid_out_leaves_bytes_unchanged() {
        let original = blank_pdf(1);
        let bytes = apply_section_bookmarks(&original, &[part("LAB 1", None)]).unwrap();
        assert_eq!(bytes, original);
    }

    #[test]
    fn page_past_the_end_names_the_part() {
        let parts = [part("LAB 3: LISTS OPERATIONS", Some(40))];
        let err = apply_section_bookmarks(&blank_pdf(2), &parts).unwrap_err();
        assert!(matches!(
            err,
            BookmarkError::MissingPage {
                ref title,
                page_number: 40,
            } if title == "LAB 3: LISTS OPERATIONS"
        ));
        assert!(err.to_string().contains("LAB 3"));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = apply_section_bookmarks(b"not a pdf", &[]).unwrap_err();
        assert!(matches!(err, BookmarkError::Parse(_)));
    }
}
