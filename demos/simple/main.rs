use tokio::runtime::Handle;

#[tokio::main]
pub async fn main() {
    env_logger::init();

    let config_path =
        std::env::var("TRUSTBADGE_CONFIG").unwrap_or_else(|_| "trustbadge-config.json".to_owned());
    let ts_id = std::env::var("TRUSTBADGE_TS_ID").unwrap();
    let channel_id = std::env::var("TRUSTBADGE_CHANNEL_ID").unwrap();

    let client = trustbadge::ClientConfig::from_json_file(&config_path)
        .unwrap()
        .to_client();
    let view_model = client.view_model(Handle::current());

    // Wait for both fetches. A UI would subscribe to the slots instead.
    let badge = view_model.fetch_trustbadge_data(&ts_id, &channel_id);
    let guarantee = view_model.fetch_guarantee(&ts_id, &channel_id);
    if let Err(err) = badge.wait().await {
        eprintln!("Failed to fetch trustbadge data: {err}");
    }
    if let Err(err) = guarantee.wait().await {
        eprintln!("Failed to fetch guarantee: {err}");
    }

    match view_model.trustbadge_data() {
        Some(data) => println!(
            "{}: {:.2} ({} reviews), certified: {}",
            data.shop.name,
            data.grade.rating,
            data.grade.count,
            data.is_certified()
        ),
        None => println!("No trustbadge data"),
    }

    if let Some(guarantee) = view_model.guarantee() {
        println!(
            "Guarantee: up to {} {} for {} days",
            guarantee.max_protection_amount,
            guarantee.main_protection_currency,
            guarantee.max_protection_duration
        );
    }
}
