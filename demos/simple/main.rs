use boardflow::{Engine, NodeType, Properties};

fn main() {
    let engine = Engine::new();
    let mut editor = engine.create();

    let trigger = editor.add_node(NodeType::Trigger, Some("Card created"));
    let notify = editor.add_node(NodeType::Action, Some("Notify assignee"));
    let done = editor.add_node(NodeType::End, Some("Done"));

    editor.connect(&trigger, &notify);
    editor.connect(&notify, &done);
    editor.move_node(&notify, 450.0, 150.0);
    editor.move_node(&done, 650.0, 150.0);

    let mut props = Properties::new();
    props.set("channel", "email");
    editor.update_node_properties(&notify, &props);

    let report = engine.validate(&editor.snapshot());
    println!("valid: {}", report.valid);
    for message in report.messages() {
        println!("error: {}", message);
    }

    engine.save(&editor).unwrap();

    let stored = engine.store().list().unwrap();
    println!("stored workflows: {}", stored.len());
    for workflow in stored {
        println!("  {} ({} nodes, {} connections)", workflow.name, workflow.nodes.len(), workflow.connections.len());
    }
}
