//! Scenario tests spanning nodes, hubs, groups and the scene tick

mod event_hub_scenarios;
