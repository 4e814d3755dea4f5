//! Integration tests for TwiML generation.

use twilio_api::twiml::{Element, GET, WOMAN};

#[test]
fn response_with_say_serializes_exactly() {
    let mut response = Element::response();
    response.child("Say").body("Hello World");
    assert_eq!(
        response.to_fragment(),
        "<Response><Say>Hello World</Say></Response>"
    );
}

#[test]
fn full_output_carries_the_declaration() {
    let mut response = Element::response();
    response.child("Say").body("Hello World");
    assert_eq!(
        response.to_xml(),
        r#"<?xml version="1.0" encoding="UTF-8"?><Response><Say>Hello World</Say></Response>"#
    );
}

#[test]
fn attribute_values_stringify() {
    let mut response = Element::response();
    response
        .child("Say")
        .body("Hello")
        .attr("loop", 3)
        .attr("voice", WOMAN);
    assert_eq!(
        response.to_fragment(),
        r#"<Response><Say loop="3" voice="woman">Hello</Say></Response>"#
    );
}

#[test]
fn a_realistic_voice_response_assembles() {
    let mut response = Element::response();
    {
        let gather = response
            .child("Gather")
            .attr("action", "/menu")
            .attr("method", GET)
            .attr("num_digits", 1);
        gather.child("Say").body("For sales, press 1");
    }
    response.child("Say").body("Goodbye");
    response.child("Hangup");

    assert_eq!(
        response.to_fragment(),
        concat!(
            "<Response>",
            r#"<Gather action="/menu" method="GET" num_digits="1">"#,
            "<Say>For sales, press 1</Say>",
            "</Gather>",
            "<Say>Goodbye</Say>",
            "<Hangup/>",
            "</Response>"
        )
    );
}

#[test]
fn sms_reply_uses_the_sender_rename() {
    let mut response = Element::response();
    response
        .child("Sms")
        .body("Running late, be there soon")
        .attr("sender", "+14158675309")
        .attr("to", "+15105551234");
    assert_eq!(
        response.to_fragment(),
        r#"<Response><Sms from="+14158675309" to="+15105551234">Running late, be there soon</Sms></Response>"#
    );
}

#[test]
fn prebuilt_subtrees_can_be_pushed() {
    let mut dial = Element::new("Dial");
    dial.child("Number").body("+15105551234");

    let mut response = Element::response();
    response.push(dial);
    assert_eq!(
        response.to_fragment(),
        "<Response><Dial><Number>+15105551234</Number></Dial></Response>"
    );
}
