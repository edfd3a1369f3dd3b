//! Schnittstelle zur externen Kürzeste-Wege-Suche.
//!
//! Die Suche selbst ist nicht Teil dieser Library. Sie liefert entweder sofort
//! eine Node-Folge oder später über ein [`RouteTicket`] (Kanal mit genau einem Ergebnis).

use std::sync::mpsc;

/// Externe Suche, die eine grobe Node-Route zwischen zwei Node-IDs liefert.
pub trait RouteSearch {
    /// Sucht synchron; `None` wenn keine Verbindung existiert.
    fn find_route(&self, start_id: u64, end_id: u64) -> Option<Vec<u64>>;

    /// Startet eine (ggf. asynchrone) Suche. Standard: sofort aufgelöst.
    fn find_route_deferred(&self, start_id: u64, end_id: u64) -> RouteTicket {
        RouteTicket::ready(self.find_route(start_id, end_id))
    }
}

impl<F> RouteSearch for F
where
    F: Fn(u64, u64) -> Option<Vec<u64>>,
{
    fn find_route(&self, start_id: u64, end_id: u64) -> Option<Vec<u64>> {
        self(start_id, end_id)
    }
}

/// Sendeseite eines [`RouteTicket`]; gehört dem Worker der Suche.
#[derive(Debug)]
pub struct RouteSender {
    sender: mpsc::SyncSender<Option<Vec<u64>>>,
}

impl RouteSender {
    /// Liefert das Suchergebnis aus.
    ///
    /// Wurde das Ticket bereits verworfen, geht das Ergebnis verloren.
    pub fn deliver(self, route: Option<Vec<u64>>) {
        if self.sender.send(route).is_err() {
            log::debug!("Routen-Ergebnis verworfen: Ticket existiert nicht mehr");
        }
    }
}

/// Einmaliges Ergebnis einer laufenden Suche.
///
/// Wird der [`RouteSender`] ohne Auslieferung gedroppt (Suche abgebrochen),
/// gilt das als "keine Route".
#[derive(Debug)]
pub struct RouteTicket {
    receiver: mpsc::Receiver<Option<Vec<u64>>>,
    arrived: Option<Option<Vec<u64>>>,
}

impl RouteTicket {
    /// Erstellt ein offenes Ticket samt Sendeseite.
    pub fn channel() -> (RouteSender, RouteTicket) {
        let (sender, receiver) = mpsc::sync_channel(1);
        (
            RouteSender { sender },
            RouteTicket {
                receiver,
                arrived: None,
            },
        )
    }

    /// Erstellt ein bereits aufgelöstes Ticket.
    pub fn ready(route: Option<Vec<u64>>) -> Self {
        let (sender, ticket) = Self::channel();
        sender.deliver(route);
        ticket
    }

    /// Prüft ohne zu blockieren, ob das Ergebnis vorliegt.
    pub fn is_ready(&mut self) -> bool {
        if self.arrived.is_some() {
            return true;
        }
        match self.receiver.try_recv() {
            Ok(route) => {
                self.arrived = Some(route);
                true
            }
            Err(mpsc::TryRecvError::Empty) => false,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.arrived = Some(None);
                true
            }
        }
    }

    /// Wartet blockierend auf das Ergebnis.
    pub fn wait(self) -> Option<Vec<u64>> {
        match self.arrived {
            Some(route) => route,
            None => self.receiver.recv().ok().flatten(),
        }
    }
}
