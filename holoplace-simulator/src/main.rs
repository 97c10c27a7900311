pub fn main() {
    println!("[HOLOPLACE_SIMULATOR] MAIN!");
    holoplace_simulator::real_main().expect("Error running holoplace!");
    println!("[HOLOPLACE_SIMULATOR] FINISHED! Goodbye!");
}
