use std::fmt::Display;

/// One player connection as seen by the host server.
pub trait Connection {
    type Error: Display;

    /// Character the connection is currently playing.
    fn character_id(&self) -> u32;

    /// Sends a chat/system message on `channel`.
    fn send_message(&self, channel: u32, message: &str) -> Result<(), Self::Error>;
}

/// Outcome of a [`message_all`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Broadcast {
    pub delivered: usize,
    pub failed: usize,
}

/// First connection, in registry order, playing character `pid`.
pub fn get_player<'a, C, I>(connections: I, pid: u32) -> Option<&'a C>
where
    C: Connection + 'a,
    I: IntoIterator<Item = &'a C>,
{
    connections
        .into_iter()
        .find(|client| client.character_id() == pid)
}

/// Sends `message` on `channel` to every connection.
///
/// A failed send is logged and counted; the remaining connections still get
/// the message.
pub fn message_all<'a, C, I>(connections: I, channel: u32, message: &str) -> Broadcast
where
    C: Connection + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut broadcast = Broadcast::default();
    for client in connections {
        match client.send_message(channel, message) {
            Ok(()) => broadcast.delivered += 1,
            Err(e) => {
                log::warn!(
                    "message to character {} on channel {} failed: {}",
                    client.character_id(),
                    channel,
                    e
                );
                broadcast.failed += 1;
            }
        }
    }
    log::debug!(
        "broadcast on channel {}: {} delivered, {} failed",
        channel,
        broadcast.delivered,
        broadcast.failed
    );
    broadcast
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct TestClient {
        character: u32,
        offline: bool,
        inbox: RefCell<Vec<(u32, String)>>,
    }

    impl TestClient {
        fn new(character: u32) -> Self {
            Self {
                character,
                offline: false,
                inbox: RefCell::new(Vec::new()),
            }
        }

        fn offline(character: u32) -> Self {
            Self {
                offline: true,
                ..Self::new(character)
            }
        }
    }

    impl Connection for TestClient {
        type Error = String;

        fn character_id(&self) -> u32 {
            self.character
        }

        fn send_message(&self, channel: u32, message: &str) -> Result<(), String> {
            if self.offline {
                return Err("socket closed".to_string());
            }
            self.inbox.borrow_mut().push((channel, message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_get_player_returns_first_match() {
        let clients = vec![TestClient::new(7), TestClient::new(9), TestClient::new(9)];
        let found = get_player(&clients, 9);
        assert!(found.is_some_and(|c| std::ptr::eq(c, &clients[1])));
    }

    #[test]
    fn test_get_player_missing() {
        let clients = vec![TestClient::new(7)];
        assert!(get_player(&clients, 8).is_none());

        let empty: Vec<TestClient> = Vec::new();
        assert!(get_player(&empty, 7).is_none());
    }

    #[test]
    fn test_message_all_reaches_everyone() {
        let clients = vec![TestClient::new(1), TestClient::new(2)];
        let broadcast = message_all(&clients, 3, "server restart in 5 minutes");

        assert_eq!(broadcast, Broadcast { delivered: 2, failed: 0 });
        for client in &clients {
            assert_eq!(
                client.inbox.borrow().as_slice(),
                &[(3, "server restart in 5 minutes".to_string())]
            );
        }
    }

    #[test]
    fn test_message_all_continues_after_failure() {
        let clients = vec![
            TestClient::new(1),
            TestClient::offline(2),
            TestClient::new(3),
        ];
        let broadcast = message_all(&clients, 0, "hello");

        assert_eq!(broadcast, Broadcast { delivered: 2, failed: 1 });
        assert_eq!(clients[2].inbox.borrow().len(), 1);
    }

    #[test]
    fn test_message_all_empty_registry() {
        let clients: Vec<TestClient> = Vec::new();
        assert_eq!(message_all(&clients, 0, "hello"), Broadcast::default());
    }
}
