/// Display name of an event key, falling back to the key itself.
pub fn event_label(event: &str) -> &str {
    match event {
        "30m" => "30 meter",
        "35m" => "35 meter",
        "40m" => "40 meter",
        "50m" => "50 meter",
        "60m" => "60 meter",
        "80m" => "80 meter",
        "100m" => "100 meter",
        "150m" => "150 meter",
        "200m" => "200 meter",
        "300m" => "300 meter",
        "400m" => "400 meter",
        "600m" => "600 meter",
        "800m" => "800 meter",
        "1000m" => "1000 meter",
        "1500m" => "1500 meter",
        "3000m" => "3000 meter",
        "5000m" => "5000 meter",
        "50m_h" => "50 meter horden",
        "60m_h" => "60 meter horden",
        "100m_h" => "100 meter horden",
        "110m_h" => "110 meter horden",
        "400m_h" => "400 meter horden",
        "60m_h_76c" => "60 m horden (76,2 cm)",
        "60m_h_84c" => "60 m horden (84 cm)",
        "2000m_steeple" => "2000 meter steeplechase",
        "3000m_steeple" => "3000 meter steeplechase",
        "4x40m" => "4 × 40 meter",
        "4x60m" => "4 × 60 meter",
        "4x80m" => "4 × 80 meter",
        "4x100m" => "4 × 100 meter",
        "4x200m" => "4 × 200 meter",
        "4x400m" => "4 × 400 meter",
        "zwedse_est" => "Zweedse estafette",
        "hoog" => "Hoogspringen",
        "ver" => "Verspringen",
        "polsstok" => "Polsstokhoogspringen",
        "hss" => "Hink-stapspringen",
        "kogel" => "Kogelstoten",
        "discus" => "Discuswerpen",
        "kogelslingeren" => "Kogelslingeren",
        "speer" => "Speerwerpen",
        "gewichtwerpen" => "Gewichtwerpen",
        "bal" => "Balwerpen",
        other => other,
    }
}
