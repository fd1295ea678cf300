use pretty_assertions::assert_eq;
use terrada_landing::catalog;
use terrada_landing::config::SiteConfig;
use terrada_landing::reservation::{reservation_link, reservation_message};

#[test]
fn dacia_logan_link() {
    let logan = catalog::find("Dacia Logan").unwrap();
    let link = reservation_link(&logan, &SiteConfig::default());

    let expected = format!(
        "https://wa.me/212661559222?text={}",
        urlencoding::encode("Bonjour, je souhaite réserver la voiture Dacia Logan à 250dh/jour")
    );
    assert_eq!(link, expected);
    assert_eq!(
        link,
        "https://wa.me/212661559222?text=Bonjour%2C%20je%20souhaite%20r%C3%A9server%20la%20voiture%20Dacia%20Logan%20%C3%A0%20250dh%2Fjour"
    );
}

#[test]
fn every_vehicle_gets_its_own_message() {
    let template = SiteConfig::default().reservation.message_template;
    for v in catalog::vehicles() {
        let message = reservation_message(&v, &template);
        assert!(message.contains(v.name), "{message}");
        assert!(message.ends_with(v.price_label), "{message}");
    }
}

#[test]
fn configured_number_and_template_are_used() {
    let config = SiteConfig::from_toml_str(
        r#"
        [contact]
        whatsapp_number = "212500000000"

        [reservation]
        message_template = "{name} - {price}"
        "#,
    )
    .unwrap();

    let kia = catalog::find("Kia Picanto").unwrap();
    assert_eq!(
        reservation_link(&kia, &config),
        "https://wa.me/212500000000?text=Kia%20Picanto%20-%20300dh%2Fjour"
    );
}
