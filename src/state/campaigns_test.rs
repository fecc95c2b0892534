use super::*;

fn campaign(id: &str, status: &str, leads: i64) -> Campaign {
    Campaign {
        id: id.to_owned(),
        name: format!("Campaign {id}"),
        channel: "email".to_owned(),
        status: status.to_owned(),
        leads_count: leads,
    }
}

#[test]
fn filtered_applies_status_selection() {
    let state = CampaignsState {
        items: vec![campaign("c-1", "running", 10), campaign("c-2", "draft", 0)],
        status_filter: Some("running".to_owned()),
        ..CampaignsState::default()
    };
    let ids: Vec<_> = state.filtered().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["c-1"]);
}

#[test]
fn leads_total_follows_the_filter() {
    let mut state = CampaignsState {
        items: vec![
            campaign("c-1", "running", 10),
            campaign("c-2", "running", 5),
            campaign("c-3", "finished", 40),
        ],
        ..CampaignsState::default()
    };
    assert_eq!(state.filtered_leads_total(), 55);
    state.status_filter = Some("running".to_owned());
    assert_eq!(state.filtered_leads_total(), 15);
    assert_eq!(state.status_options(), vec!["finished", "running"]);
}
