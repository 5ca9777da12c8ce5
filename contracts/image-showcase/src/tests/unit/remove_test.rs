use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn owner_removes_image() {
    let mut contract = new_contract();
    let uploaded = seed_images(&mut contract, 2);

    testing_env!(context(owner()).build());
    contract.remove_image(0).unwrap();
    assert!(has_event("image_removed"));

    let slot = contract.images(0).unwrap();
    assert!(slot.is_removed());
    assert_ne!(slot.hash, uploaded[0].hash);
    assert_ne!(slot.description, uploaded[0].description);
    assert_ne!(slot.author, uploaded[0].author);

    assert_eq!(contract.get_image(0), None);
    assert_eq!(contract.image_count(), 2);
    assert_eq!(contract.live_image_count(), 1);
}

#[test]
fn non_owner_cannot_remove() {
    let mut contract = new_contract();
    seed_images(&mut contract, 1);

    testing_env!(context(author()).build());
    let err = contract.remove_image(0).unwrap_err();
    assert_eq!(err, ShowcaseError::only_owner());
    assert!(contract.get_image(0).is_some());
}

#[test]
fn remove_twice_rejected() {
    let mut contract = new_contract();
    seed_images(&mut contract, 1);

    testing_env!(context(owner()).build());
    contract.remove_image(0).unwrap();
    assert_eq!(
        contract.remove_image(0).unwrap_err(),
        ShowcaseError::image_removed(0)
    );
    assert_eq!(contract.live_image_count(), 0);
}

#[test]
fn remove_unknown_rejected() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    assert_eq!(
        contract.remove_image(7).unwrap_err(),
        ShowcaseError::image_not_found(7)
    );
}

#[test]
fn ids_stay_stable_after_removal() {
    let mut contract = new_contract();
    seed_images(&mut contract, 2);
    testing_env!(context(owner()).build());
    contract.remove_image(1).unwrap();

    let image = upload_as(&mut contract, author(), "fresh");
    assert_eq!(image.id, 2);
}

#[test]
fn get_image_only_returns_live_images() {
    let mut contract = new_contract();
    let uploaded = seed_images(&mut contract, 2);

    testing_env!(context(owner()).build());
    contract.remove_image(0).unwrap();

    assert_eq!(contract.get_image(0), None);
    assert_eq!(contract.get_image(1), Some(uploaded[1].clone()));
    assert_eq!(contract.get_image(2), None);
    assert!(contract.images(0).unwrap().hash.is_empty());
}

#[test]
fn live_index_follows_removals() {
    let mut contract = new_contract();
    seed_images(&mut contract, 6);

    testing_env!(context(owner()).build());
    for id in [1, 3, 0, 5] {
        contract.remove_image(id).unwrap();
    }

    let live: Vec<u64> = contract.live_ids.iter().copied().collect();
    assert_eq!(live, vec![2, 4]);
    assert_eq!(contract.live_image_count(), 2);
    assert_eq!(contract.live_position(4), Some(1));
    assert_eq!(contract.live_position(3), None);

    let image = upload_as(&mut contract, author(), "fresh");
    let live: Vec<u64> = contract.live_ids.iter().copied().collect();
    assert_eq!(live, vec![2, 4, image.id]);
}
