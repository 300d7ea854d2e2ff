use primer_core::schema::app::*;
use primer_core::Bundle;

fn order_lifecycle() -> StateMachine {
    let mut machine = StateMachine::new("OrderLifecycle");
    machine.add_state(State::new("pending").initial(true));
    machine.add_state(State::new("paid"));
    machine.add_state(State::new("shipped").terminal(true));
    machine.add_state(State::new("cancelled").terminal(true));

    for (name, from, to) in [
        ("pay", "pending", "paid"),
        ("cancel", "pending", "cancelled"),
        ("ship", "paid", "shipped"),
    ] {
        machine
            .add_transition(Transition::new(name, from, to))
            .unwrap();
    }

    machine
}

#[test]
fn initial_state_and_transitions() {
    let machine = order_lifecycle();

    assert_eq!(machine.initial_state().unwrap().name, "pending");
    assert_eq!(machine.states().len(), 4);

    let from_pending: Vec<_> = machine
        .transitions_from("pending")
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(from_pending, ["pay", "cancel"]);
    assert_eq!(machine.transitions_from("shipped").count(), 0);
    assert!(machine.state("cancelled").unwrap().terminal);
}

#[test]
fn transition_endpoints_must_exist() {
    let mut machine = order_lifecycle();

    let err = machine
        .add_transition(Transition::new("refund", "paid", "refunded").condition("within 30 days"))
        .unwrap_err();
    assert!(err.is_invariant_violation());
    assert!(err.to_string().contains("`refunded`"), "{err}");
    assert_eq!(machine.transitions().len(), 3);
}

#[test]
fn replacing_a_state() {
    let mut machine = order_lifecycle();
    machine.add_state(State::new("paid").description("Payment received"));

    assert_eq!(machine.states().len(), 4);
    assert_eq!(machine.state("paid").unwrap().description, "Payment received");
}

#[test]
fn models_carry_state_machines() {
    let mut model = Model::new("Order");
    model.state_machine = Some(order_lifecycle());

    let mut bundle = Bundle::new("Primer", "Shop");
    let id = bundle.add_model(model).unwrap();

    let machine = bundle.model(id).state_machine.as_ref().unwrap();
    assert_eq!(machine.name, "OrderLifecycle");
}

#[test]
fn events() {
    let mut bundle = Bundle::new("Primer", "Shop");
    bundle.add_event(
        Event::new("Order Placed", "order.placed")
            .model("Order")
            .with_field(Field::new("orderId", "id").mandatory(true))
            .with_field(Field::new("note", "text")),
    );
    bundle.add_event(Event::new("Order Shipped", "order.shipped"));

    assert_eq!(bundle.events().len(), 2);

    let placed = bundle.event("Order Placed").unwrap();
    assert_eq!(placed.code, "order.placed");
    assert_eq!(placed.model.as_deref(), Some("Order"));

    let mandatory: Vec<_> = placed.mandatory_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(mandatory, ["orderId"]);
    assert_eq!(placed.field("note").unwrap().ty, "text");

    // last write wins
    bundle.add_event(Event::new("Order Placed", "order.created"));
    assert_eq!(bundle.events().len(), 2);
    assert_eq!(bundle.event("Order Placed").unwrap().code, "order.created");
}
