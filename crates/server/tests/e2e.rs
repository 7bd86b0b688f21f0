use std::net::SocketAddr;

use configs::{AppConfig, IdScheme};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
}

async fn start_server(scheme: IdScheme) -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.store.id_scheme = scheme;
    cfg.server.frontend_dir = format!("target/test-data/{}/frontend", Uuid::new_v4());

    let app = match scheme {
        IdScheme::Sequential => server::startup::build_app::<i64>(&cfg),
        IdScheme::Uuid => server::startup::build_app::<Uuid>(&cfg),
    };
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server(IdScheme::Sequential).await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_sequential_crud_flow() -> anyhow::Result<()> {
    let app = start_server(IdScheme::Sequential).await?;
    let c = client();

    let res = c.get(format!("{}/customers", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Vec<Value>>().await?.len(), 5);

    let res = c.post(format!("{}/customers", app.base_url))
        .json(&json!({"id": 10, "name": "Tess", "role": "CTO", "email": "tess@co.com", "phone": "+1", "contacted": false}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.post(format!("{}/customers", app.base_url))
        .json(&json!({"id": 10, "name": "Tess again"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    assert_eq!(res.json::<Value>().await?["message"], "Customer with this ID already exist");

    let res = c.patch(format!("{}/customers/10", app.base_url))
        .json(&json!({"name": "Tess", "role": "CEO", "email": "tess@co.com", "phone": "+1", "contacted": true}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let all = res.json::<Vec<Value>>().await?;
    let tess = all.iter().find(|c| c["id"] == 10).expect("tess present");
    assert_eq!(tess["role"], "CEO");
    assert_eq!(tess["contacted"], true);

    let res = c.delete(format!("{}/customers/10", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Vec<Value>>().await?.len(), 5);

    let res = c.get(format!("{}/customers/10", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Customer not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_parallel_uuid_creates_keep_ids_unique() -> anyhow::Result<()> {
    let app = start_server(IdScheme::Uuid).await?;
    let c = client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let c = c.clone();
        let url = format!("{}/customers", app.base_url);
        tasks.push(tokio::spawn(async move {
            c.post(url).json(&json!({"name": format!("p{i}")})).send().await
        }));
    }
    for t in tasks {
        let res = t.await??;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let list = c.get(format!("{}/customers", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 25);
    let ids: std::collections::HashSet<String> = list
        .iter()
        .map(|c| c["id"].as_str().expect("uuid id").to_string())
        .collect();
    assert_eq!(ids.len(), 25);
    Ok(())
}
