use crate::{book::Book, types::SearchField};

impl SearchField {
    /// The text of `book` this field selects.
    pub fn value_of(self, book: &Book) -> &str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
            SearchField::Genre => book.genre.as_str(),
        }
    }
}

/// Case-insensitive substring match over one field, in store order.
///
/// An empty term matches every record.
pub fn search<'a>(books: &'a [Book], term: &str, field: SearchField) -> Vec<&'a Book> {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|b| field.value_of(b).to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Genre;

    fn book(title: &str, author: &str, genre: Genre) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            publication_year: 1990,
            genre,
            read_status: false,
            added_date: String::new(),
        }
    }

    fn titles(found: Vec<&Book>) -> Vec<&str> {
        found.into_iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn matches_ignore_case_and_keep_order() {
        let books = vec![
            book("The Hobbit", "Tolkien", Genre::Fantasy),
            book("Cosmos", "Sagan", Genre::Science),
            book("the silmarillion", "Tolkien", Genre::Fantasy),
        ];
        assert_eq!(
            titles(search(&books, "THE", SearchField::Title)),
            vec!["The Hobbit", "the silmarillion"]
        );
        assert_eq!(titles(search(&books, "sci", SearchField::Genre)), vec!["Cosmos"]);
        assert!(search(&books, "asimov", SearchField::Author).is_empty());
    }

    #[test]
    fn genre_matches_hyphenated_spelling() {
        let books = vec![book("Sapiens", "Harari", Genre::NonFiction)];
        assert_eq!(search(&books, "non-f", SearchField::Genre).len(), 1);
        assert!(search(&books, "nonf", SearchField::Genre).is_empty());
    }
}
