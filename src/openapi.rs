//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use crate::handlers::{author, book, publisher, versioned};
use crate::model::{
    Author, AuthorVm, AuthorWithBooksVm, Book, BookAuthorVm, BookVm, BookWithAuthorsVm, Publisher,
    PublisherVm, PublisherWithBooksAndAuthorsVm,
};
use crate::response::ErrorVm;

#[derive(OpenApi)]
#[openapi(
    info(title = "my-books", version = "v1"),
    paths(
        publisher::get_all_publishers,
        publisher::add_publisher,
        publisher::get_publisher_by_id,
        publisher::get_publisher_data,
        publisher::delete_publisher_by_id,
        author::add_author,
        author::get_all_authors,
        author::get_author_with_books,
        author::delete_author_by_id,
        book::get_all_books,
        book::get_book_by_id,
        book::add_book_with_authors,
        book::update_book_by_id,
        book::delete_book_by_id,
        versioned::get_test_data,
    ),
    components(schemas(
        Publisher,
        Author,
        Book,
        PublisherVm,
        AuthorVm,
        BookVm,
        BookAuthorVm,
        PublisherWithBooksAndAuthorsVm,
        AuthorWithBooksVm,
        BookWithAuthorsVm,
        ErrorVm,
    )),
    tags(
        (name = "Publisher", description = "Publishers and their books"),
        (name = "Author", description = "Authors"),
        (name = "Book", description = "Books and author links"),
        (name = "Test", description = "API versioning check")
    )
)]
pub struct ApiDoc;
