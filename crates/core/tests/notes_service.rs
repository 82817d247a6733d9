//! `NotesService` behaviour over a mock repository.

mod support;

use std::sync::Arc;

use dealdesk_core::NotesService;
use dealdesk_domain::{DealDeskError, DealId};
use support::repositories::MockNotesRepository;

#[tokio::test]
async fn notes_are_listed_newest_first() {
    let repo = MockNotesRepository::new();
    let service = NotesService::new(Arc::new(repo.clone()));
    let deal = DealId::new();

    service.add_note(&deal, "Sarah", "Sent the contract").await.unwrap();
    service.add_note(&deal, "Omar", "Client signed").await.unwrap();
    service.add_note(&DealId::new(), "Sarah", "Other deal").await.unwrap();

    let notes = service.list_notes(&deal).await.unwrap();
    let contents: Vec<&str> = notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["Client signed", "Sent the contract"]);
    assert_eq!(repo.len(), 3);
}

#[tokio::test]
async fn blank_content_is_rejected() {
    let repo = MockNotesRepository::new();
    let service = NotesService::new(Arc::new(repo.clone()));

    let err = service.add_note(&DealId::new(), "Sarah", "   \n").await.unwrap_err();

    assert!(matches!(err, DealDeskError::InvalidInput(_)));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn blank_author_is_rejected() {
    let service = NotesService::new(Arc::new(MockNotesRepository::new()));

    let err = service.add_note(&DealId::new(), "", "Follow up Monday").await.unwrap_err();

    assert!(matches!(err, DealDeskError::InvalidInput(_)));
}

#[tokio::test]
async fn note_keeps_original_text() {
    let service = NotesService::new(Arc::new(MockNotesRepository::new()));
    let deal = DealId::new();

    let note = service.add_note(&deal, " Sarah ", "  padded  ").await.unwrap();

    assert_eq!(note.deal_id, deal);
    assert_eq!(note.author, " Sarah ");
    assert_eq!(note.content, "  padded  ");
}
