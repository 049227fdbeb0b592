mod model;
mod status;
mod store;
mod validate;

use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, put, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};
use chrono::{Local, NaiveDate};
use dotenv::dotenv;

use crate::model::*;
use crate::store::VehicleStore;

#[get("/")]
async fn index() -> impl Responder {
    "FleetAlert vehicle renewal tracker"
}

#[get("/vehicles")]
async fn get_vehicles(data: web::Data<AppState>) -> impl Responder {
    let today = Local::now().date_naive();
    let store = data.store.lock().unwrap();
    let vehicles: Vec<VehicleStatusModel> = store
        .all()
        .iter()
        .map(|vehicle| with_status(vehicle, today))
        .collect();

    let json_response = serde_json::json!({
        "rows": vehicles.len(),
        "vehicles": vehicles
    });
    HttpResponse::Ok().json(json_response)
}

#[get("/vehicles/{id}")]
async fn get_vehicle_by_id(data: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let vehicle_id = path.into_inner().0;
    let today = Local::now().date_naive();
    let store = data.store.lock().unwrap();

    match store.get(&vehicle_id) {
        Some(vehicle) => HttpResponse::Ok().json(with_status(vehicle, today)),
        None => HttpResponse::NotFound().body("Vehicle not found"),
    }
}

#[post("/vehicles")]
async fn post_vehicle(
    data: web::Data<AppState>,
    request: web::Json<PostVehicle>,
) -> impl Responder {
    match validate::validate(&request) {
        Ok(vehicle) => {
            let mut store = data.store.lock().unwrap();
            let record = store.insert(vehicle);
            HttpResponse::Ok().json(record.id)
        }
        Err(errors) => HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors })),
    }
}

#[put("/vehicles/{id}")]
async fn put_vehicle_by_id(
    data: web::Data<AppState>,
    path: web::Path<(String,)>,
    request: web::Json<PostVehicle>,
) -> impl Responder {
    let vehicle_id = path.into_inner().0;

    match validate::validate(&request) {
        Ok(vehicle) => {
            let mut store = data.store.lock().unwrap();
            match store.replace(&vehicle_id, vehicle) {
                Some(record) => HttpResponse::Ok().json(record),
                None => HttpResponse::NotFound().body("Vehicle not found"),
            }
        }
        Err(errors) => HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors })),
    }
}

#[get("/settings")]
async fn get_settings(data: web::Data<AppState>) -> impl Responder {
    let settings = data.settings.lock().unwrap();
    HttpResponse::Ok().json(*settings)
}

#[post("/settings")]
async fn post_settings(
    data: web::Data<AppState>,
    request: web::Json<PostSettings>,
) -> impl Responder {
    match validate::validate_settings(&request) {
        Ok(saved) => {
            let mut settings = data.settings.lock().unwrap();
            *settings = saved;
            HttpResponse::Ok().json(saved)
        }
        Err(errors) => HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors })),
    }
}

// Statuses are recomputed on every read; they are never stored.
fn with_status(vehicle: &VehicleModel, today: NaiveDate) -> VehicleStatusModel {
    VehicleStatusModel {
        vehicle: vehicle.clone(),
        insurance_status: status::classify(vehicle.insurance_expiry, today),
        puc_status: status::classify(vehicle.puc_expiry, today),
    }
}

pub struct AppState {
    store: Mutex<VehicleStore>,
    settings: Mutex<AlertSettings>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port = std::env::var("HTTP_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("HTTP_PORT must be a valid number");

    let today = Local::now().date_naive();
    let state = web::Data::new(AppState {
        store: Mutex::new(VehicleStore::with_sample_data(today)),
        settings: Mutex::new(AlertSettings::default()),
    });
    println!("✅ Seeded sample vehicles relative to {}", today);
    println!("🚀 Server started successfully");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allow_any_method()
                    .supports_credentials(),
            )
            .wrap(Logger::default())
            .service(index)
            .service(get_vehicles)
            .service(get_vehicle_by_id)
            .service(post_vehicle)
            .service(put_vehicle_by_id)
            .service(get_settings)
            .service(post_settings)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
