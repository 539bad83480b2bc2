fn main() {
    mirror_dodge::game::run();
}
