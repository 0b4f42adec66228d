/// Exposes the stable unique identifier of a stored record.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Associates dependent records with their owning cash book.
pub trait OwnedByCashBook {
    fn cash_book_id(&self) -> &str;
}
