use acme_dns_czechia::{config::Settings, Dns01Solver};
use std::env;

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let token =
        env::var("CZECHIA_TOKEN").expect("Envvar CZECHIA_TOKEN should be set with valid API token");
    let zone = env::var("CZECHIA_ZONE").expect("Envvar CZECHIA_ZONE should be set with apex zone");

    let solver = Dns01Solver::new(Settings::new(token, &zone))?;

    // Publish a dummy validation token the way an ACME client would

    let validation_name = format!("_acme-challenge.{}", zone);
    let perform_result = solver
        .perform(&zone, &validation_name, "not-a-real-acme-token")
        .await;

    println!("solver perform result={:?}", perform_result);

    // An ACME client would wait for propagation and let the CA validate
    // before cleaning up

    solver
        .cleanup(&zone, &validation_name, "not-a-real-acme-token")
        .await;

    println!("solver cleanup done");

    Ok(())
}
