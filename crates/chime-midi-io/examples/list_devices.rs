use chime_midi_io::HardwareOutput;

fn main() {
    println!("=== MIDI Output Devices ===");
    let devices = HardwareOutput::list_devices();
    if devices.is_empty() {
        println!("  (none found)");
    }
    for dev in &devices {
        println!("  [{}] {}", dev.index, dev.name);
    }
}
