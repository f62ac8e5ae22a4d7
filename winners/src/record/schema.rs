table! {
    hackathons (id) {
        id -> Text,
        name -> Text,
    }
}

table! {
    teams (id) {
        id -> Text,
        name -> Text,
    }
}

table! {
    winner_solutions (id) {
        id -> Text,
        hackathon_id -> Text,
        team_id -> Text,
        win_money -> Double,
        link_to_solution -> Text,
        link_to_presentation -> Text,
        can_share -> Bool,
    }
}

joinable!(winner_solutions -> hackathons (hackathon_id));
joinable!(winner_solutions -> teams (team_id));

allow_tables_to_appear_in_same_query!(hackathons, teams, winner_solutions);
