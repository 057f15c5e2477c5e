//! Messages and notifications.

use scolaris_core::{Message, Notification, NotificationType, Role};

#[allow(clippy::too_many_arguments)]
fn message(
    id: &str,
    sender: (&str, &str, Role),
    receiver: (&str, &str),
    content: &str,
    is_read: bool,
    created_at: &str,
) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender.0.to_string(),
        sender_name: sender.1.to_string(),
        sender_role: sender.2,
        receiver_id: receiver.0.to_string(),
        receiver_name: receiver.1.to_string(),
        content: content.to_string(),
        is_read,
        created_at: created_at.to_string(),
    }
}

/// Exchanged messages, most recent first.
#[must_use]
pub fn messages() -> Vec<Message> {
    let teacher = ("u-3", "Marie Faye", Role::Teacher);
    let admin = ("u-1", "Fatou Ndiaye", Role::SchoolAdmin);
    let parent = ("u-4", "Ousmane Camara");
    vec![
        message("m-1", teacher, parent, "Khady a fait d'excellents progrès en lecture ce mois-ci.", false, "2025-10-04T17:30:00"),
        message("m-2", admin, parent, "La réunion parents-enseignants aura lieu le vendredi 10 octobre à 17h.", false, "2025-10-02T12:00:00"),
        message("m-3", teacher, parent, "Omar n'a pas rendu son cahier de récitation cette semaine.", true, "2025-09-26T16:45:00"),
        message("m-4", admin, ("u-3", "Marie Faye"), "Merci de transmettre les notes du 1er trimestre avant le 15 octobre.", true, "2025-09-24T09:10:00"),
    ]
}

/// Messages received by a user.
#[must_use]
pub fn messages_for(user_id: &str) -> Vec<Message> {
    messages()
        .into_iter()
        .filter(|m| m.receiver_id == user_id)
        .collect()
}

fn notification(
    id: &str,
    title: &str,
    body: &str,
    kind: NotificationType,
    is_read: bool,
    created_at: &str,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: body.to_string(),
        kind,
        is_read,
        created_at: created_at.to_string(),
    }
}

/// Top-bar notifications, most recent first.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    use NotificationType::{Info, Success, Warning};
    vec![
        notification("n-1", "Paiement reçu", "Paiement de 45 000 F CFA reçu pour Awa Ndiaye.", Success, false, "2025-10-04T09:13:00"),
        notification("n-2", "Paiement en attente", "Le paiement de Sokhna Cissé attend une confirmation Wave.", Warning, false, "2025-10-05T10:09:00"),
        notification("n-3", "Nouvelle inscription", "Ibou Sarr a été inscrit en CE2 A.", Info, true, "2025-09-15T11:00:00"),
        notification("n-4", "Échec de paiement", "Le paiement Wave d'Ibou Sarr a échoué.", NotificationType::Error, true, "2025-09-27T17:49:00"),
    ]
}

/// Number of unread notifications, shown as the bell badge.
#[must_use]
pub fn unread_notification_count() -> usize {
    notifications().iter().filter(|n| !n.is_read).count()
}
