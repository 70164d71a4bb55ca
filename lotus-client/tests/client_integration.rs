// lotus-client/tests/client_integration.rs
// Integration tests against in-process mock backends speaking the
// services' envelope contract.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::json;

use lotus_client::api::{EmployeeService, EventService, KitchenService, OrderService, TableService};
use lotus_client::views::{EmployeeDirectory, EventPlanner, KitchenQueue, OrderBoard, TablePlan};
use lotus_client::{ClientConfig, ClientError};
use shared::models::{
    Department, EmployeeCreate, Event, EventBook, EventStatus, KitchenOrder, KitchenOrderItem,
    KitchenOrderStatus, KitchenOrderStatusUpdate, Order, OrderItem, OrderStatus,
    OrderStatusUpdate, RestaurantTable, RestaurantTableCreate, TableStatus, TableStatusUpdate,
    Venue,
};
use shared::Envelope;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// ============================================================================
// Table fixture
// ============================================================================

#[derive(Default)]
struct TableFixture {
    tables: Mutex<Vec<RestaurantTable>>,
    next_id: AtomicI64,
}

fn table_router(fixture: Arc<TableFixture>) -> Router {
    Router::new()
        .route("/api/tables", get(list_tables).post(create_table))
        .route("/api/tables/{id}", delete(delete_table))
        .route("/api/tables/{id}/status", patch(patch_table_status))
        .with_state(fixture)
}

async fn list_tables(
    State(fixture): State<Arc<TableFixture>>,
) -> Json<Envelope<Vec<RestaurantTable>>> {
    Json(Envelope::ok(fixture.tables.lock().unwrap().clone()))
}

async fn create_table(
    State(fixture): State<Arc<TableFixture>>,
    Json(payload): Json<RestaurantTableCreate>,
) -> Json<Envelope<RestaurantTable>> {
    let id = fixture.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let table = RestaurantTable {
        id,
        table_number: payload.table_number,
        capacity: payload.capacity,
        status: payload.status,
        location: payload.location,
        description: payload.description,
    };
    fixture.tables.lock().unwrap().push(table.clone());
    Json(Envelope::ok(table))
}

async fn patch_table_status(
    State(fixture): State<Arc<TableFixture>>,
    Path(id): Path<i64>,
    Json(payload): Json<TableStatusUpdate>,
) -> Response {
    let mut tables = fixture.tables.lock().unwrap();
    match tables.iter_mut().find(|t| t.id == id) {
        Some(table) => {
            table.status = payload.status;
            Json(Envelope::ok(table.clone())).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Table not found with id: {id}")})),
        )
            .into_response(),
    }
}

async fn delete_table(State(fixture): State<Arc<TableFixture>>, Path(id): Path<i64>) -> Response {
    let mut tables = fixture.tables.lock().unwrap();
    let before = tables.len();
    tables.retain(|t| t.id != id);
    if tables.len() < before {
        Json(Envelope::ok(())).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Table not found with id: {id}")})),
        )
            .into_response()
    }
}

#[tokio::test]
async fn test_create_then_occupy_table() {
    let fixture = Arc::new(TableFixture::default());
    let base = spawn(table_router(fixture)).await;

    let plan = TablePlan::with_service(TableService::new(&ClientConfig::new(&base)).unwrap());

    let bystander = plan
        .create(&RestaurantTableCreate {
            table_number: 1,
            capacity: 2,
            status: TableStatus::Reserved,
            location: None,
            description: None,
        })
        .await
        .unwrap();

    let created = plan
        .create(&RestaurantTableCreate {
            table_number: 5,
            capacity: 4,
            status: TableStatus::Available,
            location: None,
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(created.status, TableStatus::Available);

    let updated = plan
        .update_status(created.id, TableStatus::Occupied)
        .await
        .unwrap();
    assert_eq!(updated.status, TableStatus::Occupied);

    // The refetched collection reflects the change and nothing else moved.
    let tables = plan.tables().await;
    assert_eq!(tables.len(), 2);
    let occupied = tables.iter().find(|t| t.id == created.id).unwrap();
    assert_eq!(occupied.status, TableStatus::Occupied);
    let other = tables.iter().find(|t| t.id == bystander.id).unwrap();
    assert_eq!(other.status, TableStatus::Reserved);

    assert_eq!(plan.occupancy().await, 50.0);
}

#[tokio::test]
async fn test_delete_missing_table_keeps_cache() {
    let fixture = Arc::new(TableFixture::default());
    let base = spawn(table_router(fixture)).await;

    let plan = TablePlan::with_service(TableService::new(&ClientConfig::new(&base)).unwrap());
    plan.create(&RestaurantTableCreate {
        table_number: 3,
        capacity: 6,
        status: TableStatus::Available,
        location: None,
        description: None,
    })
    .await
    .unwrap();

    let err = plan.remove(999).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(err.to_string().contains("999"));

    // Failed mutation leaves the cached collection untouched.
    let tables = plan.tables().await;
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].table_number, 3);
}

#[tokio::test]
async fn test_local_validation_rejects_before_any_request() {
    let fixture = Arc::new(TableFixture::default());
    let base = spawn(table_router(fixture.clone())).await;

    let plan = TablePlan::with_service(TableService::new(&ClientConfig::new(&base)).unwrap());
    let err = plan
        .create(&RestaurantTableCreate {
            table_number: 7,
            capacity: 0,
            status: TableStatus::Available,
            location: None,
            description: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(fixture.tables.lock().unwrap().is_empty());
}

// ============================================================================
// Restaurant order fixture
// ============================================================================

struct OrderFixture {
    orders: Mutex<Vec<Order>>,
    status_calls: AtomicUsize,
}

fn make_order(id: i64, status: OrderStatus) -> Order {
    Order {
        id,
        order_number: format!("RO-{id:04}"),
        table_id: Some(5),
        customer_name: Some("Walk-in".into()),
        status,
        total_amount: 900.0,
        special_instructions: None,
        number_of_guests: Some(2),
        order_time: None,
        updated_at: None,
        order_items: vec![OrderItem {
            id: Some(1),
            menu_item_id: 10,
            menu_item_name: "Fried Rice".into(),
            quantity: 2,
            unit_price: 450.0,
            subtotal: Some(900.0),
            special_requests: None,
        }],
    }
}

fn order_router(fixture: Arc<OrderFixture>) -> Router {
    Router::new()
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{id}/status", patch(patch_order_status))
        .with_state(fixture)
}

async fn list_orders(State(fixture): State<Arc<OrderFixture>>) -> Json<Envelope<Vec<Order>>> {
    Json(Envelope::ok(fixture.orders.lock().unwrap().clone()))
}

async fn patch_order_status(
    State(fixture): State<Arc<OrderFixture>>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> Response {
    fixture.status_calls.fetch_add(1, Ordering::SeqCst);
    let mut orders = fixture.orders.lock().unwrap();
    let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Order not found with id: {id}")})),
        )
            .into_response();
    };
    // The backend re-checks legality against its own copy.
    if !order.status.can_transition_to(payload.status) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": format!("Cannot move order from {} to {}", order.status, payload.status)
            })),
        )
            .into_response();
    }
    order.status = payload.status;
    Json(Envelope::ok(order.clone())).into_response()
}

#[tokio::test]
async fn test_invalid_transition_fails_without_a_request() {
    let fixture = Arc::new(OrderFixture {
        orders: Mutex::new(vec![make_order(1, OrderStatus::Pending)]),
        status_calls: AtomicUsize::new(0),
    });
    let base = spawn(order_router(fixture.clone())).await;

    let board = OrderBoard::with_service(OrderService::new(&ClientConfig::new(&base)).unwrap());
    board.refresh().await.unwrap();

    // PENDING -> READY skips two steps; rejected locally.
    let err = board
        .apply_transition(1, OrderStatus::Ready)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition(_)));
    assert_eq!(fixture.status_calls.load(Ordering::SeqCst), 0);
    assert_eq!(board.orders().await[0].status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_terminal_order_rejects_transition() {
    let fixture = Arc::new(OrderFixture {
        orders: Mutex::new(vec![make_order(1, OrderStatus::Served)]),
        status_calls: AtomicUsize::new(0),
    });
    let base = spawn(order_router(fixture.clone())).await;

    let board = OrderBoard::with_service(OrderService::new(&ClientConfig::new(&base)).unwrap());
    board.refresh().await.unwrap();

    let err = board.advance(1).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition(_)));
    let err = board.cancel(1).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition(_)));
    assert_eq!(fixture.status_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_advance_confirms_and_refetches() {
    let fixture = Arc::new(OrderFixture {
        orders: Mutex::new(vec![make_order(1, OrderStatus::Pending)]),
        status_calls: AtomicUsize::new(0),
    });
    let base = spawn(order_router(fixture.clone())).await;

    let board = OrderBoard::with_service(OrderService::new(&ClientConfig::new(&base)).unwrap());
    board.refresh().await.unwrap();

    let confirmed = board.advance(1).await.unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);
    assert_eq!(board.orders().await[0].status, OrderStatus::Confirmed);
    assert_eq!(fixture.status_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_backend_rejection_surfaces_verbatim_and_keeps_cache() {
    let fixture = Arc::new(OrderFixture {
        orders: Mutex::new(vec![make_order(1, OrderStatus::Pending)]),
        status_calls: AtomicUsize::new(0),
    });
    let base = spawn(order_router(fixture.clone())).await;

    let board = OrderBoard::with_service(OrderService::new(&ClientConfig::new(&base)).unwrap());
    board.refresh().await.unwrap();

    // A racing operator cancels the order behind this client's back.
    fixture.orders.lock().unwrap()[0].status = OrderStatus::Cancelled;

    let err = board
        .apply_transition(1, OrderStatus::Confirmed)
        .await
        .unwrap_err();
    match err {
        ClientError::TransitionRejected(message) => {
            assert_eq!(message, "Cannot move order from CANCELLED to CONFIRMED");
        }
        other => panic!("expected TransitionRejected, got {other:?}"),
    }
    // The cache still shows the last confirmed fetch.
    assert_eq!(board.orders().await[0].status, OrderStatus::Pending);
}

// ============================================================================
// Kitchen fixture
// ============================================================================

struct KitchenFixture {
    orders: Mutex<Vec<KitchenOrder>>,
}

fn make_kitchen_order(id: i64, status: KitchenOrderStatus) -> KitchenOrder {
    KitchenOrder {
        id,
        restaurant_id: Some(1),
        table_number: Some(format!("T{id}")),
        staff_id: None,
        status,
        special_instructions: None,
        total_amount: 500.0,
        order_items: vec![KitchenOrderItem {
            id: None,
            menu_item_id: 2,
            item_name: Some("Soup".into()),
            quantity: 2,
            price: Some(250.0),
            notes: None,
        }],
        created_at: None,
        updated_at: None,
    }
}

fn kitchen_router(fixture: Arc<KitchenFixture>) -> Router {
    Router::new()
        .route("/api/kitchen/orders", get(list_kitchen_orders))
        .route(
            "/api/kitchen/orders/{id}/status",
            patch(patch_kitchen_order_status),
        )
        .with_state(fixture)
}

async fn list_kitchen_orders(
    State(fixture): State<Arc<KitchenFixture>>,
) -> Json<Envelope<Vec<KitchenOrder>>> {
    Json(Envelope::ok(fixture.orders.lock().unwrap().clone()))
}

async fn patch_kitchen_order_status(
    State(fixture): State<Arc<KitchenFixture>>,
    Path(id): Path<i64>,
    Json(payload): Json<KitchenOrderStatusUpdate>,
) -> Response {
    let mut orders = fixture.orders.lock().unwrap();
    let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("Order not found with id: {id}")})),
        )
            .into_response();
    };
    if !order.status.can_transition_to(payload.status) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": format!("Cannot move order from {} to {}", order.status, payload.status)
            })),
        )
            .into_response();
    }
    order.status = payload.status;
    Json(Envelope::ok(order.clone())).into_response()
}

#[tokio::test]
async fn test_kitchen_advance_walks_the_progression() {
    let fixture = Arc::new(KitchenFixture {
        orders: Mutex::new(vec![
            make_kitchen_order(1, KitchenOrderStatus::Pending),
            make_kitchen_order(2, KitchenOrderStatus::Ready),
        ]),
    });
    let base = spawn(kitchen_router(fixture)).await;

    let queue = KitchenQueue::with_service(KitchenService::new(&ClientConfig::new(&base)).unwrap());
    queue.refresh().await.unwrap();

    let cooking = queue.advance(1).await.unwrap();
    assert_eq!(cooking.status, KitchenOrderStatus::Cooking);

    let served = queue.advance(2).await.unwrap();
    assert_eq!(served.status, KitchenOrderStatus::Served);

    // A served ticket is terminal.
    let err = queue.advance(2).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidTransition(_)));

    let counts = queue.local_counts().await;
    assert_eq!(counts.cooking, 1);
    assert_eq!(counts.served, 1);
    assert_eq!(counts.total(), 2);

    let lanes = queue.lanes().await;
    assert_eq!(lanes[0].0, KitchenOrderStatus::Pending);
    assert!(lanes[0].1.is_empty());
    assert_eq!(lanes[1].1.len(), 1);
}

// ============================================================================
// Event fixture
// ============================================================================

struct EventFixture {
    venues: Mutex<Vec<Venue>>,
    events: Mutex<Vec<Event>>,
    next_id: AtomicI64,
}

fn event_router(fixture: Arc<EventFixture>) -> Router {
    Router::new()
        .route("/api/events/venues", get(list_venues))
        .route("/api/events", get(list_events))
        .route("/api/events/book", post(book_event))
        .with_state(fixture)
}

async fn list_venues(State(fixture): State<Arc<EventFixture>>) -> Json<Envelope<Vec<Venue>>> {
    Json(Envelope::ok(fixture.venues.lock().unwrap().clone()))
}

async fn list_events(State(fixture): State<Arc<EventFixture>>) -> Json<Envelope<Vec<Event>>> {
    Json(Envelope::ok(fixture.events.lock().unwrap().clone()))
}

async fn book_event(
    State(fixture): State<Arc<EventFixture>>,
    Json(payload): Json<EventBook>,
) -> Json<Envelope<Event>> {
    let id = fixture.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let event = Event {
        id,
        venue_id: payload.venue_id,
        customer_name: payload.customer_name,
        event_date: payload.event_date,
        attendees: payload.attendees,
        status: EventStatus::Booked,
        created_at: None,
    };
    fixture.events.lock().unwrap().push(event.clone());
    Json(Envelope::ok(event))
}

#[tokio::test]
async fn test_event_booking_checks_venue_capacity() {
    let fixture = Arc::new(EventFixture {
        venues: Mutex::new(vec![Venue {
            id: 1,
            name: "Garden Hall".into(),
            capacity: 50,
            price_per_hour: 7500.0,
            created_at: None,
        }]),
        events: Mutex::new(Vec::new()),
        next_id: AtomicI64::new(0),
    });
    let base = spawn(event_router(fixture.clone())).await;

    let planner = EventPlanner::with_service(EventService::new(&ClientConfig::new(&base)).unwrap());
    let (venues, events) = planner.refresh().await.unwrap();
    assert_eq!((venues, events), (1, 0));

    let date = chrono::NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();

    let err = planner
        .book(&EventBook {
            venue_id: 1,
            customer_name: "Fernando".into(),
            event_date: date,
            attendees: 80,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(fixture.events.lock().unwrap().is_empty());

    let booked = planner
        .book(&EventBook {
            venue_id: 1,
            customer_name: "Fernando".into(),
            event_date: date,
            attendees: 40,
        })
        .await
        .unwrap();
    assert_eq!(booked.status, EventStatus::Booked);
    assert_eq!(planner.events().await.len(), 1);
    assert_eq!(planner.venue_name(1).await.as_deref(), Some("Garden Hall"));
}

// ============================================================================
// Employee validation (no backend involved)
// ============================================================================

#[tokio::test]
async fn test_employee_create_validates_locally() {
    // Nothing listens here; local validation must fail first.
    let directory = EmployeeDirectory::with_service(
        EmployeeService::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap(),
    );

    let err = directory
        .create(&EmployeeCreate {
            first_name: "Nimal".into(),
            last_name: "Perera".into(),
            email: "not-an-email".into(),
            phone: None,
            department: Department::FrontDesk,
            position: None,
            salary: 52000.0,
            hire_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}
