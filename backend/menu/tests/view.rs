use menu::{
    MenuDataset, MenuState, MenuView, Residence, Selection, build_view, has_nutrition,
    view::{FeaturedDish, Station},
};
use serde_json::json;

const DANFORTH: &str = "Foodie Finds featuring Taste of the Danforth";

fn dataset() -> MenuDataset {
    serde_json::from_value(json!({
        "Chestnut Residence": {
            "Dinner": {
                "Dinner Entree": [
                    { "name": "Beef Burger", "uom": "1 each", "nutrition": [540, 28, 11, 90, 760, 38, 2, 7, 31, "", 80, 4] },
                    { "name": "Poke Bowl", "nutrition": [""] },
                    { "name": "Chicken Balls" },
                    { "name": "Veggie Lasagna" },
                    { "name": "Garlic Bread" }
                ]
            },
            "Lunch": {}
        },
        "Robarts Cafeteria": {
            "Foodie Finds featuring Taste of the Danforth": {
                "Grill": [{ "name": "Souvlaki" }, { "name": "Greek Salad" }],
                "Bakery": [{ "name": "Spanakopita" }],
                "Sweets": [{ "name": "Baklava" }, { "name": "Loukoumades" }]
            }
        }
    }))
    .unwrap()
}

fn names(featured: &[FeaturedDish]) -> Vec<&str> {
    featured.iter().map(|dish| dish.item.name.as_str()).collect()
}

#[test]
fn test_dinner_entree_only() {
    let dataset = dataset();
    let selection = Selection {
        residence: Residence::Chestnut,
        meal: "Dinner".to_string(),
    };

    let MenuView::Ready { featured, stations } = build_view(Some(&dataset), &selection) else {
        panic!("expected a menu");
    };

    assert_eq!(names(&featured), ["Beef Burger", "Poke Bowl", "Chicken Balls"]);
    assert_eq!(featured[0].icon, "🍔");
    assert_eq!(featured[1].icon, "🍣");

    let [Station { name, items }] = stations.as_slice() else {
        panic!("expected a single station");
    };
    assert_eq!(name, "Dinner Entree");
    assert_eq!(items.len(), 5);

    let overflow: Vec<bool> = items.iter().map(|item| item.overflow).collect();
    assert_eq!(overflow, [false, false, false, false, true]);
    assert_eq!(stations[0].hidden_count(), 1);
}

#[test]
fn test_special_residence_features_everything() {
    let dataset = dataset();
    let selection = Selection {
        residence: Residence::Robarts,
        meal: DANFORTH.to_string(),
    };

    let MenuView::Ready { featured, stations } = build_view(Some(&dataset), &selection) else {
        panic!("expected a menu");
    };

    assert_eq!(
        names(&featured),
        ["Souvlaki", "Greek Salad", "Spanakopita", "Baklava", "Loukoumades"]
    );
    assert_eq!(featured[1].icon, "🥗");
    assert!(stations.is_empty());
}

#[test]
fn test_empty_states() {
    let dataset = dataset();

    let lunch = Selection {
        residence: Residence::Chestnut,
        meal: "Lunch".to_string(),
    };
    assert_eq!(build_view(Some(&dataset), &lunch), MenuView::NoMenu);

    let breakfast = Selection {
        residence: Residence::Chestnut,
        meal: "Breakfast".to_string(),
    };
    assert_eq!(build_view(Some(&dataset), &breakfast), MenuView::NoMenu);

    let oak = Selection {
        residence: Residence::OakHouse,
        meal: "Dinner".to_string(),
    };
    assert_eq!(build_view(Some(&dataset), &oak), MenuView::ResidenceNotFound);

    assert_eq!(build_view(None, &oak), MenuView::Loading);
}

#[test]
fn test_state_drives_view() {
    let mut state = MenuState::from_location("?residence=chestnut", Residence::Chestnut, 19);
    assert_eq!(state.view(), MenuView::Loading);

    state.load(dataset());
    assert!(matches!(state.view(), MenuView::Ready { .. }));

    state.navigate("#Robarts%20Cafeteria", 19);
    let MenuView::Ready { featured, .. } = state.view() else {
        panic!("expected a menu");
    };
    assert_eq!(featured.len(), 5);

    state.select_residence(Residence::Chestnut, 19);
    state.select_meal("Lunch").unwrap();
    assert_eq!(state.view(), MenuView::NoMenu);
}

#[test]
fn test_nutrition_gate() {
    let dataset = dataset();
    let items = &dataset["Chestnut Residence"]["Dinner"]["Dinner Entree"];

    assert!(has_nutrition(&items[0]));
    assert!(!has_nutrition(&items[1]));
    assert!(!has_nutrition(&items[2]));
}

#[test]
fn test_view_serializes_with_state_tag() {
    let value = serde_json::to_value(MenuView::NoMenu).unwrap();

    assert_eq!(value, json!({ "state": "no_menu" }));
}
