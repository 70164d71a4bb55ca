//! Event planner view

use crate::api::EventService;
use crate::{dispatcher, ClientConfig, ClientError, ClientResult, RecordStore};
use shared::models::{Event, EventBook, EventUpdate, Venue, VenueCreate, VenueUpdate};
use shared::RecordFilter;

/// Controller for the venue and event booking pages
pub struct EventPlanner {
    service: EventService,
    venues: RecordStore<Venue>,
    events: RecordStore<Event>,
    search_term: String,
    venue_filter: Option<i64>,
}

impl EventPlanner {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_service(EventService::new(config)?))
    }

    pub fn with_service(service: EventService) -> Self {
        Self {
            service,
            venues: RecordStore::new(),
            events: RecordStore::new(),
            search_term: String::new(),
            venue_filter: None,
        }
    }

    /// Refetch venues and events together
    pub async fn refresh(&self) -> ClientResult<(usize, usize)> {
        let venue_ticket = self.venues.begin_fetch();
        let event_ticket = self.events.begin_fetch();
        let (venues, events) = tokio::try_join!(self.service.venues(), self.service.events())?;
        self.venues.complete_fetch(venue_ticket, venues).await;
        self.events.complete_fetch(event_ticket, events).await;
        Ok((self.venues.len().await, self.events.len().await))
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_venue_filter(&mut self, venue_id: Option<i64>) {
        self.venue_filter = venue_id;
    }

    pub async fn venues(&self) -> Vec<Venue> {
        self.venues.snapshot().await
    }

    pub async fn events(&self) -> Vec<Event> {
        self.events.snapshot().await
    }

    /// Events with the active filters applied
    pub async fn filtered_events(&self) -> Vec<Event> {
        let snapshot = self.events.snapshot().await;
        let filter = RecordFilter::new()
            .search(&self.search_term, |e: &Event| {
                vec![e.customer_name.as_str()]
            })
            .equals(self.venue_filter, |e: &Event| e.venue_id);
        filter.apply(&snapshot).into_iter().cloned().collect()
    }

    pub async fn venue_name(&self, venue_id: i64) -> Option<String> {
        self.venues
            .snapshot()
            .await
            .into_iter()
            .find(|v| v.id == venue_id)
            .map(|v| v.name)
    }

    /// Book an event, checking attendees against the venue capacity
    /// before any request is issued
    pub async fn book(&self, payload: &EventBook) -> ClientResult<Event> {
        let venue = self
            .venues
            .snapshot()
            .await
            .into_iter()
            .find(|v| v.id == payload.venue_id)
            .ok_or_else(|| ClientError::NotFound(format!("Venue {}", payload.venue_id)))?;
        if payload.attendees > venue.capacity {
            return Err(ClientError::Validation(format!(
                "{} attendees exceed capacity {} of {}",
                payload.attendees, venue.capacity, venue.name
            )));
        }

        dispatcher::dispatch(&self.events, self.service.book(payload), || {
            self.service.events()
        })
        .await
    }

    pub async fn update_event(&self, id: i64, payload: &EventUpdate) -> ClientResult<Event> {
        dispatcher::dispatch(&self.events, self.service.update_event(id, payload), || {
            self.service.events()
        })
        .await
    }

    pub async fn remove_event(&self, id: i64) -> ClientResult<()> {
        dispatcher::dispatch(&self.events, self.service.delete_event(id), || {
            self.service.events()
        })
        .await
    }

    pub async fn create_venue(&self, payload: &VenueCreate) -> ClientResult<Venue> {
        dispatcher::dispatch(&self.venues, self.service.create_venue(payload), || {
            self.service.venues()
        })
        .await
    }

    pub async fn update_venue(&self, id: i64, payload: &VenueUpdate) -> ClientResult<Venue> {
        dispatcher::dispatch(&self.venues, self.service.update_venue(id, payload), || {
            self.service.venues()
        })
        .await
    }

    pub async fn remove_venue(&self, id: i64) -> ClientResult<()> {
        dispatcher::dispatch(&self.venues, self.service.delete_venue(id), || {
            self.service.venues()
        })
        .await
    }
}
