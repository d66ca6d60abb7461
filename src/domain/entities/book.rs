use serde::{Deserialize, Serialize};

use super::Draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookGenre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Mystery,
    Romance,
    Biography,
    History,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    Technology,
    Business,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "Want to Read")]
    WantToRead,
    #[serde(rename = "Currently Reading")]
    CurrentlyReading,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: Option<BookGenre>,
    /// 0 until rated, then clamped to 1..=5.
    pub rating: i32,
    pub status: Option<BookStatus>,
    pub review: String,
}

impl Book {
    pub const LABEL_PLURAL: &'static str = "books";

    pub fn set_rating(&mut self, rating: i32) {
        self.rating = rating.clamp(1, 5);
    }
}

impl Draft for Book {
    fn empty() -> Self {
        Book {
            title: String::new(),
            author: String::new(),
            genre: None,
            rating: 0,
            status: None,
            review: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_clamped_to_one_through_five() {
        let mut book = Book::empty();
        book.set_rating(0);
        assert_eq!(book.rating, 1);
        book.set_rating(7);
        assert_eq!(book.rating, 5);
        book.set_rating(3);
        assert_eq!(book.rating, 3);
    }

    #[test]
    fn status_serializes_as_its_display_string() {
        let json = serde_json::to_string(&BookStatus::WantToRead).unwrap();
        assert_eq!(json, "\"Want to Read\"");
    }
}
