// =============================================================================
// Image Showcase Integration Tests
// =============================================================================
// Deploys the contract into a NEAR sandbox and drives it the way the gallery
// client does: upload, list, tip, moderate and page through images.
//
// Build the wasm with `cargo near build` first, or point
// IMAGE_SHOWCASE_WASM_PATH at it.

use anyhow::Result;
use near_workspaces::network::Sandbox;
use near_workspaces::types::NearToken;
use near_workspaces::{Account, Contract, Worker};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::utils::{deploy_contract, get_wasm_path, setup_sandbox};

// =============================================================================
// View Structs (match contract's return types)
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct ImageView {
    pub id: u64,
    pub hash: String,
    pub description: String,
    pub tip_amount: String,
    pub author: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryNavView {
    pub entries: Vec<Value>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryPageView {
    pub images: Vec<ImageView>,
    pub current_page: u32,
    pub page_count: u32,
    pub items_per_page: u32,
    pub total_images: u32,
    pub nav: Option<GalleryNavView>,
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

struct Fixture {
    worker: Worker<Sandbox>,
    contract: Contract,
    deployer: Account,
    author: Account,
    tipper: Account,
}

async fn setup() -> Result<Fixture> {
    let worker = setup_sandbox().await?;
    let contract = deploy_contract(&worker, &get_wasm_path("image-showcase")).await?;
    let deployer = worker.dev_create_account().await?;
    let author = worker.dev_create_account().await?;
    let tipper = worker.dev_create_account().await?;

    contract
        .call("new")
        .args_json(json!({ "owner_id": deployer.id().to_string() }))
        .transact()
        .await?
        .into_result()?;

    Ok(Fixture {
        worker,
        contract,
        deployer,
        author,
        tipper,
    })
}

async fn upload(contract: &Contract, author: &Account, hash: &str) -> Result<ImageView> {
    let outcome = author
        .call(contract.id(), "upload_image")
        .args_json(json!({ "hash": hash, "description": "Image description" }))
        .transact()
        .await?
        .into_result()?;
    Ok(outcome.json()?)
}

async fn image_count(contract: &Contract) -> Result<u64> {
    Ok(contract.view("image_count").await?.json()?)
}

async fn image(contract: &Contract, id: u64) -> Result<Option<ImageView>> {
    Ok(contract
        .view("images")
        .args_json(json!({ "id": id }))
        .await?
        .json()?)
}

async fn gallery_page(contract: &Contract, page: u32) -> Result<GalleryPageView> {
    Ok(contract
        .view("get_gallery_page")
        .args_json(json!({ "page": page }))
        .await?
        .json()?)
}

// =============================================================================
// Tests: Deployment
// =============================================================================

#[tokio::test]
async fn test_deploys_with_owner() -> Result<()> {
    let f = setup().await?;
    let owner: String = f.contract.view("owner").await?.json()?;
    assert_eq!(owner, f.deployer.id().to_string());
    assert_eq!(image_count(&f.contract).await?, 0);
    Ok(())
}

// =============================================================================
// Tests: Upload, tip, remove
// =============================================================================

#[tokio::test]
async fn test_upload_and_list_image() -> Result<()> {
    let f = setup().await?;

    let outcome = f
        .author
        .call(f.contract.id(), "upload_image")
        .args_json(json!({ "hash": "hash123", "description": "Image description" }))
        .transact()
        .await?
        .into_result()?;
    assert!(outcome
        .logs()
        .iter()
        .any(|log| log.contains("\"event\":\"image_uploaded\"")));

    let count = image_count(&f.contract).await?;
    assert_eq!(count, 1);

    let listed = image(&f.contract, count - 1).await?.expect("image should exist");
    assert_eq!(listed.id, count - 1);
    assert_eq!(listed.hash, "hash123");
    assert_eq!(listed.description, "Image description");
    assert_eq!(listed.tip_amount, "0");
    assert_eq!(listed.author, f.author.id().to_string());
    Ok(())
}

#[tokio::test]
async fn test_upload_empty_hash_rejected() -> Result<()> {
    let f = setup().await?;
    let outcome = f
        .author
        .call(f.contract.id(), "upload_image")
        .args_json(json!({ "hash": "", "description": "Image description" }))
        .transact()
        .await?;
    assert!(outcome.is_failure());
    assert_eq!(image_count(&f.contract).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_tip_pays_author() -> Result<()> {
    let f = setup().await?;
    let uploaded = upload(&f.contract, &f.author, "hash123").await?;

    let old_balance = f.worker.view_account(f.author.id()).await?.balance;
    f.tipper
        .call(f.contract.id(), "tip_image")
        .args_json(json!({ "id": uploaded.id }))
        .deposit(NearToken::from_near(1))
        .transact()
        .await?
        .into_result()?;
    let new_balance = f.worker.view_account(f.author.id()).await?.balance;

    assert_eq!(
        new_balance.as_yoctonear(),
        old_balance.as_yoctonear() + NearToken::from_near(1).as_yoctonear()
    );
    let tipped = image(&f.contract, uploaded.id).await?.unwrap();
    assert_eq!(tipped.tip_amount, NearToken::from_near(1).as_yoctonear().to_string());
    Ok(())
}

#[tokio::test]
async fn test_tip_unknown_image_rejected() -> Result<()> {
    let f = setup().await?;
    upload(&f.contract, &f.author, "hash123").await?;
    let count = image_count(&f.contract).await?;

    let outcome = f
        .tipper
        .call(f.contract.id(), "tip_image")
        .args_json(json!({ "id": count }))
        .deposit(NearToken::from_near(1))
        .transact()
        .await?;
    assert!(outcome.is_failure());
    Ok(())
}

#[tokio::test]
async fn test_owner_removes_image() -> Result<()> {
    let f = setup().await?;
    let uploaded = upload(&f.contract, &f.author, "hash123").await?;

    let denied = f
        .author
        .call(f.contract.id(), "remove_image")
        .args_json(json!({ "id": uploaded.id }))
        .transact()
        .await?;
    assert!(denied.is_failure());

    let outcome = f
        .deployer
        .call(f.contract.id(), "remove_image")
        .args_json(json!({ "id": uploaded.id }))
        .transact()
        .await?
        .into_result()?;
    assert!(outcome
        .logs()
        .iter()
        .any(|log| log.contains("\"event\":\"image_removed\"")));

    let slot = image(&f.contract, uploaded.id).await?.unwrap();
    assert_ne!(slot.hash, uploaded.hash);
    assert_ne!(slot.description, uploaded.description);
    assert_ne!(slot.author, uploaded.author);
    Ok(())
}

// =============================================================================
// Tests: Gallery paging
// =============================================================================

#[tokio::test]
async fn test_gallery_pages_and_clamps() -> Result<()> {
    let f = setup().await?;
    for i in 0..12 {
        upload(&f.contract, &f.author, &format!("hash{}", i)).await?;
    }

    let first = gallery_page(&f.contract, 1).await?;
    assert_eq!(first.page_count, 3);
    assert_eq!(first.total_images, 12);
    assert_eq!(first.items_per_page, 5);
    assert_eq!(first.images.len(), 5);
    let nav = first.nav.expect("nav should be shown for three pages");
    assert_eq!(
        nav.entries,
        vec![json!({ "page": 1 }), json!({ "page": 2 }), json!({ "page": 3 })]
    );
    assert!(nav.previous_disabled);
    assert!(!nav.next_disabled);

    let last = gallery_page(&f.contract, 3).await?;
    let hashes: Vec<&str> = last.images.iter().map(|i| i.hash.as_str()).collect();
    assert_eq!(hashes, vec!["hash10", "hash11"]);

    for id in 5..12u64 {
        f.deployer
            .call(f.contract.id(), "remove_image")
            .args_json(json!({ "id": id }))
            .transact()
            .await?
            .into_result()?;
    }

    let clamped = gallery_page(&f.contract, 3).await?;
    assert_eq!(clamped.current_page, 1);
    assert_eq!(clamped.page_count, 1);
    assert_eq!(clamped.images.len(), 5);
    assert!(clamped.nav.is_none());
    Ok(())
}
