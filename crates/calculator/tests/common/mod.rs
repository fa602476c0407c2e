use arith_test_support::KillOnDrop;
use serde_json::Value;
use std::time::Duration;

pub struct Running {
    pub base_url: String,
    _child: KillOnDrop,
}

pub async fn start(bin: &str) -> anyhow::Result<Running> {
    let port = arith_test_support::pick_unused_port()?;
    let child = arith_test_support::spawn_service(bin, port)?;
    arith_test_support::wait_port_open(port, Duration::from_secs(20)).await?;
    Ok(Running {
        base_url: format!("http://127.0.0.1:{port}"),
        _child: child,
    })
}

/// Raw response text, for results too wide to round-trip through `serde_json::Value`.
pub async fn post_text(base_url: &str, path: &str, body: &Value) -> anyhow::Result<(u16, String)> {
    let resp = reqwest::Client::new()
        .post(format!("{base_url}{path}"))
        .json(body)
        .send()
        .await?;
    let status = resp.status().as_u16();
    Ok((status, resp.text().await?))
}

pub async fn post_json(base_url: &str, path: &str, body: &Value) -> anyhow::Result<(u16, Value)> {
    let (status, text) = post_text(base_url, path, body).await?;
    Ok((status, serde_json::from_str(&text)?))
}
